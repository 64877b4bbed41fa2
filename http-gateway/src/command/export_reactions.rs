use crate::http::{FileUpload, Reply, Server};
use crate::Error;
use model::interaction::{
    ApplicationCommandInteraction, InteractionApplicationCommandCallbackData, InteractionResponse,
};
use reactions::{export_reactions, DiscordReactionFetcher, Export};
use tracing::info;

const FILENAME: &str = "reactions.csv";

pub async fn execute(
    server: &Server,
    interaction: &ApplicationCommandInteraction,
) -> Result<Reply, Error> {
    let message = interaction
        .data
        .target_id
        .and_then(|id| interaction.data.resolved.messages.get(&id))
        .ok_or(Error::MissingTargetMessage)?;

    let fetcher = DiscordReactionFetcher::new_with_client(
        &server.config.discord_api_base,
        message.channel_id,
        message.id,
        server.config.discord_token.clone(),
        server.http_client.clone(),
    );

    let export = export_reactions(&fetcher, &message.reactions).await;
    let data = InteractionApplicationCommandCallbackData::ephemeral(&export.message());

    let reply = match export {
        Export::Table { csv, rows, emojis } => {
            info!(message_id = %message.id, rows, emojis, "Exported reactions");

            let data = data.with_attachment(FILENAME);
            let file = FileUpload {
                filename: Box::from(FILENAME),
                content_type: "text/csv",
                data: csv.into_bytes(),
            };

            Reply::WithFile(InteractionResponse::new_channel_message_with_source(data), file)
        }
        Export::NoReactions | Export::Failed => {
            Reply::Json(InteractionResponse::new_channel_message_with_source(data))
        }
    };

    Ok(reply)
}
