use model::Snowflake;
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize)]
pub struct Config {
    pub server_addr: String,
    pub discord_public_key: String,
    pub discord_token: String,
    pub discord_application_id: Snowflake,
    #[serde(default = "default_api_base")]
    pub discord_api_base: String,
    #[serde(default)]
    pub json_log: bool,
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_owned()
}

impl Config {
    pub fn from_envvar() -> Result<Config, envy::Error> {
        envy::from_env()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_addr", &self.server_addr)
            .field("discord_public_key", &self.discord_public_key)
            .field("discord_token", &"<redacted>")
            .field("discord_application_id", &self.discord_application_id)
            .field("discord_api_base", &self.discord_api_base)
            .field("json_log", &self.json_log)
            .finish()
    }
}
