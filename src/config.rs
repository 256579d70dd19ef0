use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{loader::prelude::LoaderConfig, utils::CCStr};

pub const DEFAULT_DASHBOARD_URL: &str = "https://urban-flood-analytics.streamlit.app/";
pub const DEFAULT_DASHBOARD_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_BACKGROUND_TIMEOUT_MS: u64 = 8_000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2_000;
pub const EFFECTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/gh/hiunicornstudio/unicornstudio.js@v1.4.29/dist/unicornStudio.umd.js";
pub const EFFECTS_PROJECT_ID: &str = "1grEuiVDSVmyvEMAYhA6";

const ENV_DASHBOARD_URL: &str = "FLOOD_PORTAL_DASHBOARD_URL";
const ENV_DASHBOARD_TIMEOUT_MS: &str = "FLOOD_PORTAL_DASHBOARD_TIMEOUT_MS";
const ENV_DASHBOARD_MODE: &str = "FLOOD_PORTAL_DASHBOARD_MODE";
const ENV_BACKGROUND_TIMEOUT_MS: &str = "FLOOD_PORTAL_BACKGROUND_TIMEOUT_MS";
const ENV_REDIRECT_DELAY_MS: &str = "FLOOD_PORTAL_REDIRECT_DELAY_MS";

/// How the landing page hands over to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardMode {
    /// Show the dashboard in an iframe, with recovery actions when it can't be framed
    #[default]
    Embed,
    /// Leave the portal for the dashboard after a short delay
    Redirect,
}
impl core::str::FromStr for DashboardMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embed" | "iframe" => Ok(Self::Embed),
            "redirect" => Ok(Self::Redirect),
            _ => Err(ConfigError::InvalidMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key} must be a number of milliseconds or \"none\", got {value:?}")]
    InvalidDuration { key: &'static str, value: String },
    #[error("dashboard mode must be \"embed\" or \"redirect\", got {0:?}")]
    InvalidMode(String),
    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub dashboard_url: CCStr,
    /// `None` disables the timeout and relies on the iframe signals only
    pub dashboard_timeout_ms: Option<u64>,
    pub dashboard_mode: DashboardMode,
    pub background_script_url: CCStr,
    pub background_project_id: CCStr,
    pub background_timeout_ms: Option<u64>,
    pub redirect_delay_ms: u64,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dashboard_url: CCStr::from(DEFAULT_DASHBOARD_URL),
            dashboard_timeout_ms: Some(DEFAULT_DASHBOARD_TIMEOUT_MS),
            dashboard_mode: DashboardMode::default(),
            background_script_url: CCStr::from(EFFECTS_SCRIPT_URL),
            background_project_id: CCStr::from(EFFECTS_PROJECT_ID),
            background_timeout_ms: Some(DEFAULT_BACKGROUND_TIMEOUT_MS),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at build time.
    ///
    /// The bundle runs in a browser, so the variables are read by the compiler
    /// rather than from the process environment.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_DASHBOARD_URL => option_env!("FLOOD_PORTAL_DASHBOARD_URL"),
                ENV_DASHBOARD_TIMEOUT_MS => option_env!("FLOOD_PORTAL_DASHBOARD_TIMEOUT_MS"),
                ENV_DASHBOARD_MODE => option_env!("FLOOD_PORTAL_DASHBOARD_MODE"),
                ENV_BACKGROUND_TIMEOUT_MS => option_env!("FLOOD_PORTAL_BACKGROUND_TIMEOUT_MS"),
                ENV_REDIRECT_DELAY_MS => option_env!("FLOOD_PORTAL_REDIRECT_DELAY_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Resolve the configuration from environment-style variables.
    ///
    /// Unset or empty variables keep their default. Invalid ones are logged
    /// and keep their default too: a bad override must not break the page.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = read(ENV_DASHBOARD_URL) {
            match parse_url(ENV_DASHBOARD_URL, &value) {
                Ok(url) => config.dashboard_url = url,
                Err(e) => log::warn!("{e}, keeping {}", config.dashboard_url),
            }
        }
        if let Some(value) = read(ENV_DASHBOARD_TIMEOUT_MS) {
            match parse_timeout(ENV_DASHBOARD_TIMEOUT_MS, &value) {
                Ok(timeout) => config.dashboard_timeout_ms = timeout,
                Err(e) => log::warn!("{e}, keeping the default"),
            }
        }
        if let Some(value) = read(ENV_DASHBOARD_MODE) {
            match value.parse() {
                Ok(mode) => config.dashboard_mode = mode,
                Err(e) => log::warn!("{e}, keeping the default"),
            }
        }
        if let Some(value) = read(ENV_BACKGROUND_TIMEOUT_MS) {
            match parse_timeout(ENV_BACKGROUND_TIMEOUT_MS, &value) {
                Ok(timeout) => config.background_timeout_ms = timeout,
                Err(e) => log::warn!("{e}, keeping the default"),
            }
        }
        if let Some(value) = read(ENV_REDIRECT_DELAY_MS) {
            match parse_timeout(ENV_REDIRECT_DELAY_MS, &value) {
                Ok(delay) => config.redirect_delay_ms = delay.unwrap_or_default(),
                Err(e) => log::warn!("{e}, keeping the default"),
            }
        }

        log::debug!("AppConfig resolved: {config:?}");
        config
    }

    pub fn dashboard_loader(&self) -> LoaderConfig {
        LoaderConfig::frame(self.dashboard_url.clone()).with_timeout(self.dashboard_timeout_ms)
    }

    pub fn redirect_loader(&self) -> LoaderConfig {
        LoaderConfig::redirect(self.dashboard_url.clone(), self.redirect_delay_ms)
    }

    pub fn background_loader(&self) -> LoaderConfig {
        LoaderConfig::script(self.background_script_url.clone())
            .with_timeout(self.background_timeout_ms)
    }
}

/// `0` and `none` both mean no timeout
fn parse_timeout(key: &'static str, value: &str) -> Result<Option<u64>, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let ms = value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidDuration {
            key,
            value: value.to_owned(),
        })?;
    Ok((ms > 0).then_some(ms))
}

fn parse_url(key: &'static str, value: &str) -> Result<CCStr, ConfigError> {
    let value = value.trim();
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(CCStr::from(value))
    } else {
        Err(ConfigError::InvalidUrl {
            key,
            value: value.to_owned(),
        })
    }
}
