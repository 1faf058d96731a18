use anyhow::{Context, Result};
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("BIND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("BIND_PORT") {
            Ok(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid BIND_PORT '{p}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config { host, port })
    }
}
