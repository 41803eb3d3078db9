use serde::Deserialize;
use std::env;

// Top-level configuration, loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub upstream: UpstreamConfig,
}

// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Where the seat allocations come from
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub allocations_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_planner=debug,tower_http=debug".to_string()),
            },
            upstream: UpstreamConfig {
                allocations_url: env::var("ALLOCATIONS_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000/api/allocations/".to_string()),
            },
        }
    }
}
