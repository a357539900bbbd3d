use crate::app_config::{AppConfig, EmbedderKind};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the real environment so tests
/// can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value = parse_usize(var, default)?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let embedder = parse_embedder(&or_default("HISTSENT_EMBEDDER", "local"))?;
    let tei_url = lookup("HISTSENT_TEI_URL")
        .ok()
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty());

    if embedder == EmbedderKind::Tei && tei_url.is_none() {
        return Err(ConfigError::MissingEnvVar("HISTSENT_TEI_URL".to_string()));
    }

    let tei_timeout_secs = parse_u64("HISTSENT_TEI_TIMEOUT_SECS", "30")?;
    let embed_dim = parse_positive("HISTSENT_EMBED_DIM", "4096")?;
    let context_window = parse_usize("HISTSENT_CONTEXT_WINDOW", "150")?;
    let min_content_chars = parse_usize("HISTSENT_MIN_CONTENT_CHARS", "20")?;
    let progress_every = parse_positive("HISTSENT_PROGRESS_EVERY", "50")?;
    let log_level = or_default("HISTSENT_LOG_LEVEL", "info");

    Ok(AppConfig {
        embedder,
        tei_url,
        tei_timeout_secs,
        embed_dim,
        context_window,
        min_content_chars,
        progress_every,
        log_level,
    })
}

/// Parse a string into an [`EmbedderKind`] variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than `local` or `tei`.
fn parse_embedder(s: &str) -> Result<EmbedderKind, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "local" => Ok(EmbedderKind::Local),
        "tei" => Ok(EmbedderKind::Tei),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HISTSENT_EMBEDDER".to_string(),
            reason: format!("expected 'local' or 'tei', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
