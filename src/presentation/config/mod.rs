mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AssistantSettings, BACKEND_URL_ENV, DEFAULT_BACKEND_URL, DEFAULT_RELAY_PORT,
    DEFAULT_UPSTREAM_URL, LoggingSettings, RELAY_APOLOGY, RELAY_NO_ANSWER, RelaySettings,
    ServerSettings, Settings,
};
