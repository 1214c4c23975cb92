pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod widgets;

pub use config::{AssistantSettings, Environment, RelaySettings, Settings};
pub use router::{ASK_ROUTE, create_router};
pub use state::AppState;
