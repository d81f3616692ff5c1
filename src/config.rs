use std::{env, net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("invalid listen address '{0}'")]
    InvalidAddr(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            Err(_) => 3000,
        };

        Ok(Self {
            data_path: env::var("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/entries.json")),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))
    }
}
