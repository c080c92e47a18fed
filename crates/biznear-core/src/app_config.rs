use std::net::SocketAddr;
use std::path::PathBuf;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML override for the embedded town/district/category catalogs.
    pub catalog_path: Option<PathBuf>,
    pub store_base_url: String,
    pub store_api_key: Option<String>,
    pub store_timeout_secs: u64,
    pub distance_base_url: String,
    pub distance_api_key: Option<String>,
    pub distance_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("store_base_url", &self.store_base_url)
            .field(
                "store_api_key",
                &self.store_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("store_timeout_secs", &self.store_timeout_secs)
            .field("distance_base_url", &self.distance_base_url)
            .field(
                "distance_api_key",
                &self.distance_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("distance_timeout_secs", &self.distance_timeout_secs)
            .finish()
    }
}
