use http_gateway::command::Command;
use http_gateway::{configure_logging, Config, Error};
use model::interaction::ApplicationCommand;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::from_envvar() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    configure_logging(config.json_log);

    let commands = Command::definitions();
    match register(&config, &commands).await {
        Ok(()) => info!("Registered {} commands", commands.len()),
        Err(e) => {
            error!(error = %e, "Failed to register commands");
            std::process::exit(1);
        }
    }
}

// Bulk overwrite: any global command not listed here is removed
async fn register(config: &Config, commands: &[ApplicationCommand]) -> Result<(), Error> {
    let url = format!(
        "{}/applications/{}/commands",
        config.discord_api_base.trim_end_matches('/'),
        config.discord_application_id
    );

    let res = reqwest::Client::new()
        .put(url)
        .header("Authorization", format!("Bot {}", config.discord_token))
        .json(commands)
        .send()
        .await?;

    let status = res.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = res.text().await?;
        Error::ResponseError {
            status: status.as_u16(),
            body,
        }
        .into()
    }
}
