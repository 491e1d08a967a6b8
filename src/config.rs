use std::env;

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalog_seed: Option<u64>,
}

impl Config {
    pub fn init() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let catalog_seed = env::var("CATALOG_SEED")
            .ok()
            .map(|seed| {
                seed.parse::<u64>()
                    .with_context(|| format!("CATALOG_SEED must be an unsigned integer, got {seed:?}"))
            })
            .transpose()?;

        Ok(Config { port, catalog_seed })
    }
}
