use bank::Result;

use std::env;

use anyhow::Context;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Seeds the credential generator when set, making issued credentials reproducible
pub const SEED_ENV_VAR: &str = "BANK_LEDGER_SEED";

#[derive(Debug, Default)]
pub struct AppConfig {
    pub seed: Option<u64>,
}

pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let seed = match env::var(SEED_ENV_VAR) {
        Ok(value) => Some(parse_seed(&value)?),
        Err(env::VarError::NotPresent) => None,
        Err(e) => Err(e).with_context(|| format!("Couldn't read {SEED_ENV_VAR}"))?,
    };

    return Ok(AppConfig { seed });
}

fn parse_seed(value: &str) -> Result<u64> {
    let seed = value
        .trim()
        .parse()
        .with_context(|| format!("{SEED_ENV_VAR} must be an unsigned integer, got {value:?}"))?;

    Ok(seed)
}
