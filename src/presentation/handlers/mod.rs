mod ask;
mod health;

pub use ask::{RelayRequest, RelayResponse, ask_handler};
pub use health::health_handler;
