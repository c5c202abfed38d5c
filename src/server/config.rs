use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3010";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Root of uploaded files; avatars go to `<upload_dir>/avatars`.
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: err.to_string(),
            })?;

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Ok(Self {
            database_url,
            bind_address,
            upload_dir,
        })
    }
}
