use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Controls how the gateway initializes tracing.
///
/// `format` picks between human-readable console output and one-JSON-object-
/// per-event output for log collectors; see `utils::logger::init_logging`.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct LoggingConfig {
    /// Minimum level to emit: "trace", "debug", "info", "warn" or "error".
    pub level: String,
    /// Output format: "json" or "console".
    pub format: String,
}
