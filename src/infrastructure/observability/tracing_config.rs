/// Crate targets that always log at debug unless `RUST_LOG` says otherwise.
const DEBUG_TARGETS: [&str; 2] = ["book_assistant", "tower_http"];

/// What the relay binary asks of the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: impl Into<String>, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            level: level.into(),
            json_format,
        }
    }

    /// Filter used when `RUST_LOG` is unset, e.g. `warn,book_assistant=debug,tower_http=debug`.
    pub fn filter_directives(&self) -> String {
        let level = match self.level.trim() {
            "" => "info",
            level => level,
        };
        DEBUG_TARGETS
            .iter()
            .fold(level.to_string(), |directives, target| {
                format!("{directives},{target}=debug")
            })
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new("Local", "info", false)
    }
}
