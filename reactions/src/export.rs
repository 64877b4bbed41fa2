use crate::{ReactionFetcher, TableBuilder};
use futures::future::try_join_all;
use model::channel::Reaction;
use tracing::{debug, error};

/// At most this many distinct emojis are exported, keeping those with the most reactions.
pub const MAX_EMOJIS: usize = 30;

pub const CSV_HEADER: [&str; 3] = ["emoji", "discordUserId", "discordUserName"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    NoReactions,
    Table { csv: String, rows: usize, emojis: usize },
    Failed,
}

impl Export {
    pub const NO_REACTIONS_MESSAGE: &'static str = "No reactions found on this message.";
    pub const FAILED_MESSAGE: &'static str =
        "Something went wrong while fetching reactions, please try again later.";

    pub fn message(&self) -> String {
        match self {
            Export::NoReactions => Self::NO_REACTIONS_MESSAGE.to_owned(),
            Export::Failed => Self::FAILED_MESSAGE.to_owned(),
            Export::Table { rows, emojis, .. } => {
                format!("Exported {} reactions across {} emojis.", rows, emojis)
            }
        }
    }
}

/// Fetches the users behind every reaction and flattens them into one CSV table.
///
/// Reactions are ordered by count (ties keep Discord's order) and cut to [`MAX_EMOJIS`]. The
/// fetches run concurrently; if any of them fails the whole export fails, as a partial table
/// would silently misreport who reacted.
pub async fn export_reactions<F>(fetcher: &F, reactions: &[Reaction]) -> Export
where
    F: ReactionFetcher + ?Sized,
{
    if reactions.is_empty() {
        return Export::NoReactions;
    }

    let mut reactions: Vec<&Reaction> = reactions.iter().collect();
    reactions.sort_by(|a, b| b.count.cmp(&a.count));
    reactions.truncate(MAX_EMOJIS);

    debug!(emojis = reactions.len(), "Fetching reaction users");

    let fetches = reactions.iter().map(|&reaction| async move {
        fetcher
            .fetch(&reaction.emoji)
            .await
            .map(|users| (&reaction.emoji, users))
    });

    let results = match try_join_all(fetches).await {
        Ok(results) => results,
        Err(e) => {
            error!(error = %e, "Failed to fetch reaction users");
            return Export::Failed;
        }
    };

    let mut table = TableBuilder::with_header(CSV_HEADER);
    let mut rows = 0;
    for (emoji, users) in &results {
        let key = emoji.readable_key();

        for user in users {
            let id = user.id.to_string();
            table.add_line([key.as_str(), id.as_str(), user.username.as_str()]);
            rows += 1;
        }
    }

    Export::Table {
        csv: table.build(),
        rows,
        emojis: results.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;
    use async_trait::async_trait;
    use model::guild::Emoji;
    use model::user::User;
    use model::Snowflake;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Every emoji is reacted to by a single user that shares its name, unless listed in `failing`.
    #[derive(Default)]
    struct StubFetcher {
        calls: AtomicUsize,
        failing: HashSet<String>,
        slow: HashSet<String>,
    }

    #[async_trait]
    impl ReactionFetcher for StubFetcher {
        async fn fetch(&self, emoji: &Emoji) -> Result<Vec<User>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.slow.contains(&emoji.name) {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }

            if self.failing.contains(&emoji.name) {
                return FetchError::ResponseError {
                    status: 500,
                    body: "oops".to_owned(),
                }
                .into();
            }

            Ok(vec![user(&emoji.name)])
        }
    }

    fn user(name: &str) -> User {
        User {
            id: Snowflake(name.len() as u64),
            username: name.to_owned(),
            global_name: None,
            bot: false,
        }
    }

    fn reaction(name: &str, count: usize) -> Reaction {
        Reaction {
            count,
            me: false,
            emoji: Emoji::unicode(name),
        }
    }

    fn data_lines(csv: &str) -> Vec<&str> {
        csv.lines().skip(1).collect()
    }

    #[tokio::test]
    async fn test_no_reactions() {
        let fetcher = StubFetcher::default();

        let export = export_reactions(&fetcher, &[]).await;

        assert_eq!(export, Export::NoReactions);
        assert_eq!(export.message(), Export::NO_REACTIONS_MESSAGE);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_truncates_to_most_reacted() {
        let fetcher = StubFetcher::default();
        let reactions: Vec<Reaction> = (1..=34)
            .map(|count| reaction(&format!("e{}", count), count))
            .collect();

        let export = export_reactions(&fetcher, &reactions).await;

        let Export::Table { csv, rows, emojis } = export else {
            panic!("expected table");
        };

        let lines = data_lines(&csv);
        assert_eq!(rows, 30);
        assert_eq!(emojis, 30);
        assert_eq!(lines.len(), 30);
        assert!(lines[0].starts_with("e34,"));
        assert!(lines[29].starts_with("e5,"));
        assert!(!lines.iter().any(|l| l.starts_with("e4,")));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 30);
    }

    #[tokio::test]
    async fn test_ties_keep_original_order() {
        let fetcher = StubFetcher::default();
        let reactions = vec![
            reaction("b", 1),
            reaction("a", 2),
            reaction("c", 1),
            reaction("d", 2),
        ];

        let export = export_reactions(&fetcher, &reactions).await;

        let Export::Table { csv, .. } = export else {
            panic!("expected table");
        };
        let order: Vec<&str> = data_lines(&csv)
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(order, vec!["a", "d", "b", "c"]);
    }

    #[tokio::test]
    async fn test_order_survives_slow_fetches() {
        let fetcher = StubFetcher {
            slow: HashSet::from(["first".to_owned()]),
            ..Default::default()
        };
        let reactions = vec![reaction("first", 5), reaction("second", 1)];

        let export = export_reactions(&fetcher, &reactions).await;

        let Export::Table { csv, .. } = export else {
            panic!("expected table");
        };
        assert_eq!(
            csv,
            "emoji,discordUserId,discordUserName\nfirst,5,first\nsecond,6,second\n"
        );
    }

    #[tokio::test]
    async fn test_single_failure_fails_export() {
        let fetcher = StubFetcher {
            failing: HashSet::from(["bad".to_owned()]),
            ..Default::default()
        };
        let reactions = vec![reaction("ok", 3), reaction("bad", 2), reaction("fine", 1)];

        let export = export_reactions(&fetcher, &reactions).await;

        assert_eq!(export, Export::Failed);
        assert_eq!(export.message(), Export::FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_readable_keys_and_quoting() {
        let fetcher = StubFetcher::default();
        let reactions = vec![
            Reaction {
                count: 2,
                me: true,
                emoji: Emoji::custom("blob", Snowflake(1), true),
            },
            reaction("👍", 1),
        ];

        let export = export_reactions(&fetcher, &reactions).await;

        let Export::Table { csv, rows, .. } = export else {
            panic!("expected table");
        };
        assert_eq!(rows, 2);
        assert_eq!(
            data_lines(&csv),
            vec!["a:blob:1,4,blob", "👍,4,👍"]
        );
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let fetcher = StubFetcher {
            slow: (0..10).map(|i| format!("slow{}", i)).collect(),
            ..Default::default()
        };
        let reactions: Vec<Reaction> = (0..10).map(|i| reaction(&format!("slow{}", i), 1)).collect();

        let start = tokio::time::Instant::now();
        let export = export_reactions(&fetcher, &reactions).await;

        assert!(matches!(export, Export::Table { rows: 10, .. }));
        // Sequential fetches would take at least 500ms
        assert!(start.elapsed() < Duration::from_millis(400));
    }
}
