use config::{Config, Environment};
use error_stack::{report, ResultExt};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use super::api_config::ApiConfig;
use super::sheets_config::SpreadsheetConfig;

pub const CLIENT_EMAIL: &str = "CLIENT_EMAIL";
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const SHEET_ID: &str = "SHEET_ID";
pub const API_ENDPOINT: &str = "API_ENDPOINT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),
    #[error("API_ENDPOINT is not a valid http(s) URL")]
    InvalidEndpoint,
    #[error("Failed to read configuration from the environment")]
    Source,
}

/// Raw values as found in the environment, before any validation.
#[derive(Deserialize, Clone, Default)]
pub struct EnvironmentVariables {
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub sheet_id: Option<String>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

impl EnvironmentVariables {
    /// Keys are matched case-insensitively.
    pub fn load(source: Environment) -> error_stack::Result<Self, ConfigError> {
        Config::builder()
            .add_source(source)
            .build()
            .and_then(|config| config.try_deserialize::<EnvironmentVariables>())
            .change_context(ConfigError::Source)
    }

    pub fn log_summary(&self) {
        info!("{}: {}", CLIENT_EMAIL, shown(&self.client_email));
        info!(
            "{}: {}",
            PRIVATE_KEY,
            if present(&self.private_key).is_some() {
                "Loaded"
            } else {
                "Missing"
            }
        );
        info!("{}: {}", SHEET_ID, shown(&self.sheet_id));
        info!("{}: {}", API_ENDPOINT, shown(&self.api_endpoint));
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_environment(source: Environment) -> error_stack::Result<Self, ConfigError> {
        let variables = EnvironmentVariables::load(source)?;
        Self::from_variables(&variables)
    }

    /// Unset and empty variables are both treated as missing.
    #[instrument(name = "AppConfig::from_variables", skip_all)]
    pub fn from_variables(variables: &EnvironmentVariables) -> error_stack::Result<Self, ConfigError> {
        let client_email = required(&variables.client_email, CLIENT_EMAIL)?;
        let private_key = required(&variables.private_key, PRIVATE_KEY)?;
        let sheet_id = required(&variables.sheet_id, SHEET_ID)?;
        let endpoint = parse_endpoint(required(&variables.api_endpoint, API_ENDPOINT)?)?;

        Ok(AppConfig {
            sheets: SpreadsheetConfig::new(client_email, private_key, sheet_id),
            api: ApiConfig { endpoint },
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn shown(value: &Option<String>) -> &str {
    present(value).unwrap_or("<unset>")
}

fn required<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> error_stack::Result<&'a str, ConfigError> {
    present(value).ok_or_else(|| report!(ConfigError::MissingVariable(name)))
}

fn parse_endpoint(raw: &str) -> error_stack::Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .change_context(ConfigError::InvalidEndpoint)
        .attach_printable_lazy(|| format!("{}={}", API_ENDPOINT, raw))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(report!(ConfigError::InvalidEndpoint))
            .attach_printable(format!("Unsupported scheme '{}'", scheme)),
    }
}
