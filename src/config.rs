use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub skills_dir: PathBuf,
    pub log_level: String,
}

/// Load configuration from the environment, reading `.env` first if present.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unusable value.
pub fn load_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Core parsing, decoupled from the process environment so tests can pass a
/// plain map.
fn build_config<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty_path = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    };

    let store_path = non_empty_path("BRANDKIT_STORE_PATH", "./brandkit-profiles.json")?;
    let skills_dir = non_empty_path("BRANDKIT_SKILLS_DIR", "./skills")?;

    let log_level = or_default("BRANDKIT_LOG_LEVEL", "info");
    tracing_subscriber::EnvFilter::try_new(&log_level).map_err(|e| {
        ConfigError::InvalidEnvVar {
            var: "BRANDKIT_LOG_LEVEL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(Config {
        store_path,
        skills_dir,
        log_level,
    })
}
