use std::env;

/// Listen address configuration, passed explicitly to the shell at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Defaults overridden by the `HOST` and `PORT` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(raw) = env::var("PORT") {
            match raw.parse() {
                Ok(port) => config.port = port,
                Err(err) => {
                    tracing::warn!(error = %err, %raw, "PORT is not a valid port, keeping default")
                }
            }
        }
        config
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
