use crate::connectors::ConnectorConfig;

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl Settings {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

/// Load settings from `configuration.yaml` (optional) and `VENDORLINK__*` env vars.
///
/// Secrets missing from both are read from the vendor specific variables
/// (`GITHUB_TOKEN`, `AVATAR_API_KEY`, `ACCESS_CONTROL_EMAIL`, `ACCESS_CONTROL_PASSWORD`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("VENDORLINK").separator("__"),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.connectors = config.connectors.with_env_secrets();

    Ok(config)
}
