use super::ReactionFetcher;
use crate::FetchError;
use async_trait::async_trait;
use model::guild::Emoji;
use model::user::User;
use model::Snowflake;
use tracing::debug;

/// Discord caps a single page of reaction users at 100. Only the first page is ever requested, so
/// emojis with more reactions than this are truncated.
pub const PAGE_LIMIT: usize = 100;

pub struct DiscordReactionFetcher {
    base_url: String,
    token: String,
    http_client: reqwest::Client,
}

impl DiscordReactionFetcher {
    pub fn new(
        api_base: &str,
        channel_id: Snowflake,
        message_id: Snowflake,
        token: String,
    ) -> DiscordReactionFetcher {
        Self::new_with_client(api_base, channel_id, message_id, token, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_base: &str,
        channel_id: Snowflake,
        message_id: Snowflake,
        token: String,
        http_client: reqwest::Client,
    ) -> DiscordReactionFetcher {
        let base_url = format!(
            "{}/channels/{}/messages/{}/reactions",
            api_base.trim_end_matches('/'),
            channel_id,
            message_id
        );

        DiscordReactionFetcher {
            base_url,
            token,
            http_client,
        }
    }

    fn url_for(&self, emoji: &Emoji) -> String {
        format!(
            "{}/{}?limit={}",
            self.base_url,
            emoji.encoded_key(),
            PAGE_LIMIT
        )
    }
}

#[async_trait]
impl ReactionFetcher for DiscordReactionFetcher {
    async fn fetch(&self, emoji: &Emoji) -> Result<Vec<User>, FetchError> {
        let url = self.url_for(emoji);
        debug!(%url, "Fetching reaction users");

        let res = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bot {}", self.token))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            return FetchError::ResponseError {
                status: status.as_u16(),
                body,
            }
            .into();
        }

        let bytes = res.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return FetchError::FalsyResponse.into();
        }

        match serde_json::from_slice::<Option<Vec<User>>>(&bytes)? {
            Some(users) => Ok(users),
            None => FetchError::FalsyResponse.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn reaction_users(
        Path((channel_id, message_id, emoji)): Path<(String, String, String)>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> (StatusCode, String) {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bot secret") {
            return (StatusCode::UNAUTHORIZED, r#"{"message": "401: Unauthorized"}"#.into());
        }

        if query.get("limit").map(String::as_str) != Some("100") {
            return (StatusCode::BAD_REQUEST, "bad limit".into());
        }

        let body = match emoji.as_str() {
            "👍" => format!(
                r#"[{{"id": "{}", "username": "first"}}, {{"id": "{}", "username": "second"}}]"#,
                channel_id, message_id
            ),
            "blob:7" | "a:blob:8" => format!(r#"[{{"id": "9", "username": "{}"}}]"#, emoji),
            "null" => "null".to_owned(),
            "empty" => String::new(),
            _ => return (StatusCode::NOT_FOUND, r#"{"message": "Unknown Emoji"}"#.into()),
        };

        (StatusCode::OK, body)
    }

    async fn spawn_api() -> String {
        let app = Router::new().route(
            "/channels/:channel_id/messages/:message_id/reactions/:emoji",
            get(reaction_users),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn fetcher(api_base: &str, token: &str) -> DiscordReactionFetcher {
        DiscordReactionFetcher::new(api_base, Snowflake(11), Snowflake(22), token.to_owned())
    }

    #[test]
    fn test_url() {
        let fetcher = fetcher("https://discord.com/api/v10/", "t");

        assert_eq!(
            fetcher.url_for(&Emoji::unicode("👍")),
            "https://discord.com/api/v10/channels/11/messages/22/reactions/%F0%9F%91%8D?limit=100"
        );
        assert_eq!(
            fetcher.url_for(&Emoji::custom("blob", Snowflake(8), true)),
            "https://discord.com/api/v10/channels/11/messages/22/reactions/a:blob:8?limit=100"
        );
    }

    #[tokio::test]
    async fn test_fetch_unicode() {
        let api = spawn_api().await;
        let users = fetcher(&api, "secret")
            .fetch(&Emoji::unicode("👍"))
            .await
            .unwrap();

        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(users[0].id, Snowflake(11));
        assert_eq!(users[1].id, Snowflake(22));
    }

    #[tokio::test]
    async fn test_fetch_custom() {
        let api = spawn_api().await;
        let fetcher = fetcher(&api, "secret");

        let plain = fetcher
            .fetch(&Emoji::custom("blob", Snowflake(7), false))
            .await
            .unwrap();
        assert_eq!(plain[0].username, "blob:7");

        let animated = fetcher
            .fetch(&Emoji::custom("blob", Snowflake(8), true))
            .await
            .unwrap();
        assert_eq!(animated[0].username, "a:blob:8");
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let api = spawn_api().await;
        let err = fetcher(&api, "secret")
            .fetch(&Emoji::unicode("🦀"))
            .await
            .unwrap_err();

        match err {
            FetchError::ResponseError { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Unknown Emoji"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_token() {
        let api = spawn_api().await;
        let err = fetcher(&api, "wrong")
            .fetch(&Emoji::unicode("👍"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::ResponseError { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_falsy_responses() {
        let api = spawn_api().await;
        let fetcher = fetcher(&api, "secret");

        for name in ["null", "empty"] {
            let err = fetcher.fetch(&Emoji::unicode(name)).await.unwrap_err();
            assert!(matches!(err, FetchError::FalsyResponse), "{}: {}", name, err);
        }
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on the discard port
        let err = fetcher("http://127.0.0.1:9", "secret")
            .fetch(&Emoji::unicode("👍"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::ReqwestError(_)));
    }
}
