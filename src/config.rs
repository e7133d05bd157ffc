//! Configuration module

/// Fallback MongoDB address when `MONGO_URI` is not set.
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// MongoDB connection string
    pub mongo_uri: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `MONGO_URI` is the only recognized variable; everything else uses
    /// fixed defaults.
    pub fn from_env() -> Self {
        Self {
            mongo_uri: std::env::var("MONGO_URI")
                .unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            ..Self::default()
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
        }
    }
}
