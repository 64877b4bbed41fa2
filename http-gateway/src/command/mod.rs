use crate::http::{Reply, Server};
use crate::Error;
use model::interaction::{ApplicationCommand, ApplicationCommandInteraction};
use tracing::info;

mod invite;
mod export_reactions;

pub const INVITE: &str = "invite";
pub const EXPORT_REACTIONS: &str = "Export Reactions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Invite,
    ExportReactions,
    Unknown(Box<str>),
}

impl Command {
    pub fn parse(name: &str) -> Command {
        let lowered = name.to_lowercase();

        if lowered == INVITE {
            Command::Invite
        } else if lowered == EXPORT_REACTIONS.to_lowercase() {
            Command::ExportReactions
        } else {
            Command::Unknown(Box::from(name))
        }
    }

    /// Definitions registered with Discord by the `register_commands` binary.
    pub fn definitions() -> Vec<ApplicationCommand> {
        vec![
            ApplicationCommand::chat_input(INVITE, "Get a link to add the bot to your server"),
            ApplicationCommand::message(EXPORT_REACTIONS),
        ]
    }
}

pub async fn dispatch(
    server: &Server,
    interaction: ApplicationCommandInteraction,
) -> Result<Reply, Error> {
    let command = Command::parse(&interaction.data.name);
    info!(?command, interaction_id = %interaction.id, "Received command");

    match command {
        Command::Invite => Ok(invite::execute(server)),
        Command::ExportReactions => export_reactions::execute(server, &interaction).await,
        Command::Unknown(name) => Err(Error::UnknownCommand(name)),
    }
}
