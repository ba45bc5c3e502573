//! Application configuration parsed from environment variables.

use std::time::Duration;

use url::Url;

pub const DEFAULT_CALLBACK_URL: &str = "zkdappsurveyfrontend://auth";
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2_000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 10_000;

/// Host platform the front-end runs on.
///
/// Native pickers are required to choose a voting window; the web build has
/// none, so the duration is optional there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Native,
    Web,
}

impl Platform {
    /// Whether step 1 insists on both schedule dates.
    pub fn requires_schedule(self) -> bool {
        matches!(self, Self::Native)
    }
}

/// Error type for configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SURVEY_PLATFORM: {0} (expected `native` or `web`)")]
    InvalidPlatform(String),

    #[error("invalid SURVEY_CALLBACK_URL: {0}")]
    InvalidCallbackUrl(#[from] url::ParseError),
}

/// Timings of the auth-callback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackDelays {
    /// How long the processing indicator stays up.
    pub processing: Duration,
    /// How long the success view stays up before redirecting home.
    pub redirect: Duration,
}

impl Default for CallbackDelays {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            redirect: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub platform: Platform,
    /// Where the wallet app sends the user back to.
    pub callback_url: String,
    pub delays: CallbackDelays,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SURVEY_PLATFORM`: `native` (default) or `web`
    /// - `SURVEY_CALLBACK_URL`: default `zkdappsurveyfrontend://auth`
    /// - `SURVEY_PROCESSING_DELAY_MS`: default 2000
    /// - `SURVEY_REDIRECT_DELAY_MS`: default 10000
    pub fn from_env() -> Result<Self, ConfigError> {
        let platform = parse_platform(std::env::var("SURVEY_PLATFORM").ok().as_deref())?;
        let callback_url = std::env::var("SURVEY_CALLBACK_URL")
            .unwrap_or_else(|_| DEFAULT_CALLBACK_URL.to_string());
        Url::parse(&callback_url)?;
        let delays = CallbackDelays {
            processing: Duration::from_millis(env_parse_u64(
                "SURVEY_PROCESSING_DELAY_MS",
                DEFAULT_PROCESSING_DELAY_MS,
            )),
            redirect: Duration::from_millis(env_parse_u64(
                "SURVEY_REDIRECT_DELAY_MS",
                DEFAULT_REDIRECT_DELAY_MS,
            )),
        };
        Ok(Self {
            platform,
            callback_url,
            delays,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            callback_url: DEFAULT_CALLBACK_URL.to_string(),
            delays: CallbackDelays::default(),
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    parse_u64_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_u64_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_platform(raw: Option<&str>) -> Result<Platform, ConfigError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    match raw.unwrap_or("native") {
        s if s.eq_ignore_ascii_case("native") => Ok(Platform::Native),
        s if s.eq_ignore_ascii_case("web") => Ok(Platform::Web),
        other => Err(ConfigError::InvalidPlatform(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_defaults_to_native() {
        assert_eq!(parse_platform(None).unwrap(), Platform::Native);
        assert_eq!(parse_platform(Some(" Web ")).unwrap(), Platform::Web);
        assert!(matches!(
            parse_platform(Some("desktop")),
            Err(ConfigError::InvalidPlatform(p)) if p == "desktop"
        ));
    }

    #[test]
    fn blank_platform_is_native() {
        assert_eq!(parse_platform(Some("")).unwrap(), Platform::Native);
        assert_eq!(parse_platform(Some("   ")).unwrap(), Platform::Native);
    }

    #[test]
    fn unparsable_delays_fall_back() {
        assert_eq!(parse_u64_or(None, 2_000), 2_000);
        assert_eq!(parse_u64_or(Some(" 500 "), 2_000), 500);
        assert_eq!(parse_u64_or(Some("soon"), 2_000), 2_000);
        assert_eq!(parse_u64_or(Some("-1"), 2_000), 2_000);
        assert_eq!(parse_u64_or(Some(""), 10_000), 10_000);
    }

    #[test]
    fn only_native_requires_schedule() {
        assert!(Platform::Native.requires_schedule());
        assert!(!Platform::Web.requires_schedule());
    }

    #[test]
    fn default_config() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.callback_url, DEFAULT_CALLBACK_URL);
        assert_eq!(cfg.delays.processing, Duration::from_secs(2));
        assert_eq!(cfg.delays.redirect, Duration::from_secs(10));
    }
}
