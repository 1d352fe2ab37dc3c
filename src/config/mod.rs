//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// Capacity of the authors broadcast channel
    pub channel_capacity: usize,

    /// Seed the in-memory stores with demo content on startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let channel_capacity = env::var("AUTHORS_CHANNEL_CAPACITY")
            .unwrap_or_else(|_| "256".to_string())
            .parse::<usize>()
            .context("AUTHORS_CHANNEL_CAPACITY must be a positive integer")?;

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host: env::var("HOST").ok(),
            port,
            channel_capacity,
            seed_demo_data,
        })
    }
}
