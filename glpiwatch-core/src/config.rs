// glpiwatch-core/src/config.rs

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

use crate::Error;

pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_NOTIFICATION_API_URL: &str = "http://localhost:3030/api/v1/notificacao";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 180;
pub const DEFAULT_LOOKBACK_MINUTES: i64 = 3;
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 5;

/// Connection parameters for the GLPI MySQL database.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Everything the poller needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    /// Gateway base URL; `/mensagem` is appended when sending.
    pub notification_api_url: String,
    pub notification_timeout: Duration,
    /// Host (optionally with scheme) used to build ticket deep links.
    pub glpi_url: String,
    pub poll_interval: Duration,
    pub lookback_minutes: i64,
    pub timezone: Tz,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("missing required variable {}", key)))
        };

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
            user: required("DB_USER")?,
            // Raw lookup: a password may legitimately be blank or padded.
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: required("DB_NAME")?,
        };

        let notification_api_url = get("API_URL_NOTIFICACAO")
            .unwrap_or_else(|| DEFAULT_NOTIFICATION_API_URL.to_string());
        Url::parse(&notification_api_url)?;

        let timeout_secs = parse_or(
            "NOTIFICATION_TIMEOUT_SECS",
            get("NOTIFICATION_TIMEOUT_SECS"),
            DEFAULT_NOTIFICATION_TIMEOUT_SECS,
        )?;
        let poll_secs = parse_or("POLL_INTERVAL_SECS", get("POLL_INTERVAL_SECS"), DEFAULT_POLL_INTERVAL_SECS)?;
        let lookback_minutes = parse_or("LOOKBACK_MINUTES", get("LOOKBACK_MINUTES"), DEFAULT_LOOKBACK_MINUTES)?;

        if timeout_secs == 0 {
            return Err(Error::Config("NOTIFICATION_TIMEOUT_SECS must be greater than zero".into()));
        }
        if poll_secs == 0 {
            return Err(Error::Config("POLL_INTERVAL_SECS must be greater than zero".into()));
        }
        if lookback_minutes <= 0 {
            return Err(Error::Config("LOOKBACK_MINUTES must be greater than zero".into()));
        }

        let tz_name = get("GLPI_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = tz_name
            .parse::<Tz>()
            .map_err(|e| Error::Config(format!("unknown time zone '{}': {}", tz_name, e)))?;

        Ok(Self {
            database,
            notification_api_url,
            notification_timeout: Duration::from_secs(timeout_secs),
            glpi_url: required("GLPI_URL")?,
            poll_interval: Duration::from_secs(poll_secs),
            lookback_minutes,
            timezone,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|e| Error::Config(format!("invalid value for {} ('{}'): {}", key, v, e))),
    }
}
