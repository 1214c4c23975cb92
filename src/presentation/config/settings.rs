use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File, Map};
use serde::Deserialize;

use crate::application::services::{ControllerOptions, DEFAULT_GREETING};
use crate::domain::DEFAULT_USER_ID;

use super::Environment;

/// Single override for the answer endpoint used by the assistant shells.
pub const BACKEND_URL_ENV: &str = "RAG_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/chat";

pub const DEFAULT_UPSTREAM_URL: &str = "https://humbal-backend.hf.space/ask";
pub const DEFAULT_RELAY_PORT: u16 = 5000;
pub const RELAY_NO_ANSWER: &str = "I don't know.";
pub const RELAY_APOLOGY: &str = "Sorry, the backend might not be reachable.";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub relay: RelaySettings,
    pub assistant: AssistantSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>` (optional),
    /// `APP_*` variables (`APP_RELAY__UPSTREAM_URL`, ...) and finally
    /// `RAG_BACKEND_URL`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, std::env::vars().collect())
    }

    /// Same layering as [`Settings::load`], reading variables from `vars`
    /// instead of the process environment.
    pub fn load_from(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let backend_override = normalize_backend_url(vars.get(BACKEND_URL_ENV).cloned());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_RELAY_PORT))?
            .set_default("relay.upstream_url", DEFAULT_UPSTREAM_URL)?
            .set_default("relay.no_answer", RELAY_NO_ANSWER)?
            .set_default("relay.apology", RELAY_APOLOGY)?
            .set_default("assistant.endpoint", DEFAULT_BACKEND_URL)?
            .set_default("assistant.user_id", DEFAULT_USER_ID)?
            .set_default("assistant.greeting", DEFAULT_GREETING)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("assistant.endpoint", backend_override)?
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelaySettings {
    pub upstream_url: String,
    pub no_answer: String,
    pub apology: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            no_answer: RELAY_NO_ANSWER.to_string(),
            apology: RELAY_APOLOGY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantSettings {
    pub endpoint: String,
    pub user_id: String,
    pub greeting: String,
}

impl AssistantSettings {
    /// Built-in defaults with the `RAG_BACKEND_URL` override applied. Meant to
    /// be called once at startup and handed to every shell.
    pub fn resolve() -> Self {
        Self::resolve_with(std::env::var(BACKEND_URL_ENV).ok())
    }

    /// Applies `backend_url` over the defaults. Blank values are ignored.
    pub fn resolve_with(backend_url: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(endpoint) = normalize_backend_url(backend_url) {
            settings.endpoint = endpoint;
        }
        settings
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            user_id: self.user_id.clone(),
            greeting: self.greeting.clone(),
        }
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BACKEND_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

fn normalize_backend_url(url: Option<String>) -> Option<String> {
    url.map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
