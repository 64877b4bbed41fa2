use crate::http::{Reply, Server};
use model::interaction::{InteractionApplicationCommandCallbackData, InteractionResponse};
use model::Snowflake;

pub fn execute(server: &Server) -> Reply {
    let content = format!(
        "Add me to your server: {}",
        invite_url(server.config.discord_application_id)
    );

    let data = InteractionApplicationCommandCallbackData::ephemeral(&content);
    Reply::Json(InteractionResponse::new_channel_message_with_source(data))
}

fn invite_url(application_id: Snowflake) -> String {
    format!(
        "https://discord.com/oauth2/authorize?client_id={}&scope=bot%20applications.commands",
        application_id
    )
}
