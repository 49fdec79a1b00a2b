use std::env;
use tallyup_presentation::DisplayOptions;
use tracing_subscriber::EnvFilter;

const SCALE_VAR: &str = "TALLYUP_DISPLAY_SCALE";
const CURRENCY_VAR: &str = "TALLYUP_CURRENCY";
const MAX_DISPLAY_SCALE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TALLYUP_DISPLAY_SCALE must be a whole number between 0 and 8 (got '{0}')")]
    InvalidScale(String),
}

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub display: DisplayOptions,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let scale = env::var(SCALE_VAR).ok();
        let currency = env::var(CURRENCY_VAR).ok();
        Self::from_values(scale.as_deref(), currency)
    }

    fn from_values(scale: Option<&str>, currency: Option<String>) -> Result<Self, ConfigError> {
        let scale = match scale.map(str::trim) {
            None | Some("") => 0,
            Some(text) => text
                .parse::<u32>()
                .ok()
                .filter(|scale| *scale <= MAX_DISPLAY_SCALE)
                .ok_or_else(|| ConfigError::InvalidScale(text.to_owned()))?,
        };

        Ok(Self {
            display: DisplayOptions::new(scale, currency.unwrap_or_default()),
        })
    }
}

/// Logs go to stderr so stdout stays a clean report. Filter with `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
