use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use config::{Config, ConfigError, Environment};

use crate::{dal::OutputSchema, domain::InclusionPolicy};

const DEFAULT_OUTPUT_FILE: &str = "local_businesses.csv";
const DEFAULT_MAX_RESULTS_PER_SEARCH: usize = 200;
const DEFAULT_PAGINATION_DELAY_SECONDS: f64 = 2.0;
const DEFAULT_DETAIL_DELAY_SECONDS: f64 = 0.1;
const DEFAULT_SEARCH_DELAY_SECONDS: f64 = 0.5;
const MAX_DELAY_SECONDS: f64 = 3600.0;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub site_inclusion: bool,
    pub output_file: PathBuf,
    pub output_schema: OutputSchema,
    pub max_results_per_search: usize,
    pub pagination_delay: Duration,
    pub detail_delay: Duration,
    pub search_delay: Duration,
}

impl Settings {
    pub fn try_from_config(config: &Config) -> Result<Self, ConfigError> {
        let raw = |key: &str| config.get_string(key).ok();

        let api_key = raw("google_api_key")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::NotFound("GOOGLE_API_KEY".to_string()))?;

        let site_inclusion = raw("site_inclusion")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        let output_file = raw("output_file")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

        let output_schema = raw("output_schema")
            .and_then(|v| v.parse().ok())
            .unwrap_or(OutputSchema::Extended);

        Ok(Settings {
            api_key,
            site_inclusion,
            output_file: PathBuf::from(output_file),
            output_schema,
            max_results_per_search: parse_or(
                raw("max_results_per_search"),
                DEFAULT_MAX_RESULTS_PER_SEARCH,
            ),
            pagination_delay: parse_delay(
                raw("pagination_delay_seconds"),
                DEFAULT_PAGINATION_DELAY_SECONDS,
            ),
            detail_delay: parse_delay(raw("detail_delay_seconds"), DEFAULT_DETAIL_DELAY_SECONDS),
            search_delay: parse_delay(raw("search_delay_seconds"), DEFAULT_SEARCH_DELAY_SECONDS),
        })
    }

    pub fn inclusion_policy(&self) -> InclusionPolicy {
        InclusionPolicy::from(self.site_inclusion)
    }
}

/// Reads `.env` (without overriding the process environment), then the environment.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    get_configuration_with_env_file(Path::new(".env"))
}

pub fn get_configuration_with_env_file(env_file: &Path) -> Result<Settings, ConfigError> {
    match dotenvy::from_path(env_file) {
        Ok(()) => log::debug!("Loaded environment file {}", env_file.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring unreadable {}: {}", env_file.display(), e),
    }

    let config = Config::builder()
        .add_source(Environment::default())
        .build()?;

    Settings::try_from_config(&config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_delay(value: Option<String>, default_seconds: f64) -> Duration {
    let seconds = parse_or(value, default_seconds);
    match (0.0..=MAX_DELAY_SECONDS).contains(&seconds) {
        true => Duration::try_from_secs_f64(seconds)
            .unwrap_or_else(|_| Duration::from_secs_f64(default_seconds)),
        false => Duration::from_secs_f64(default_seconds),
    }
}
