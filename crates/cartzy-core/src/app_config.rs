use std::net::SocketAddr;
use std::path::PathBuf;

use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Location of the JSON product catalog, read once at startup.
    pub catalog_path: PathBuf,
    pub default_language: Language,
    /// Simulated payment processing time before a mock order is placed.
    pub checkout_delay_ms: u64,
}
