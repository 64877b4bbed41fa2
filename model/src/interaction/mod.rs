mod application_command;
pub use application_command::ApplicationCommand;

mod application_command_type;
pub use application_command_type::ApplicationCommandType;

mod interaction;
pub use interaction::{
    ApplicationCommandInteraction, Interaction, InteractionType, PingInteraction,
    UnsupportedInteraction,
};

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_resolved;
pub use application_command_interaction_data_resolved::ApplicationCommandInteractionDataResolved;

mod interaction_response;
pub use interaction_response::{InteractionResponse, InteractionResponseType};

mod interaction_application_command_callback_data;
pub use interaction_application_command_callback_data::{
    InteractionApplicationCommandCallbackData, PartialAttachment, EPHEMERAL_FLAG,
};
