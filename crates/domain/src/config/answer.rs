use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Policy for synthesized A answers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerConfig {
    #[serde(default = "default_address")]
    pub address: Ipv4Addr,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            ttl: default_ttl(),
        }
    }
}

fn default_address() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}

fn default_ttl() -> u32 {
    60
}
