use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            url: var_or("DATABASE_URL", "sqlite://library.db?mode=rwc"),
            max_connections: var_or("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .context("DATABASE_MAX_CONNECTIONS は数値で指定してください")?,
            seed: parse_flag(&var_or("SEED_DATABASE", "false")),
        };
        let server = ServerConfig {
            port: var_or("PORT", "8080")
                .parse()
                .context("PORT は数値で指定してください")?,
        };
        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    // 起動時に参照データ（資料種別・ジャンルなど）を投入するかどうか
    pub seed: bool,
}

pub struct ServerConfig {
    pub port: u16,
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
