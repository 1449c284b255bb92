use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Hex-dump every request and response at TRACE level.
    #[serde(default)]
    pub dump_packets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dump_packets: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
