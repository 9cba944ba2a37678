use std::net::SocketAddr;

use crate::{
    error::{Result, TourError},
    services::openai_client::DEFAULT_BASE_URL,
};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub bind: SocketAddr,
    /// HTTP timeout of a single completion request
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Read `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL`,
    /// `TOUR_AGENT_BIND` and `TOUR_AGENT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let bind = match get("TOUR_AGENT_BIND") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|err| {
                TourError::Environment(format!("TOUR_AGENT_BIND `{raw}` is not an address: {err}"))
            })?,
            None => defaults.bind,
        };

        let timeout_secs = match get("TOUR_AGENT_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|err| {
                TourError::Environment(format!(
                    "TOUR_AGENT_TIMEOUT_SECS `{raw}` is not a number of seconds: {err}"
                ))
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            api_key: get("OPENAI_API_KEY"),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: get("OPENAI_MODEL").unwrap_or(defaults.model),
            bind,
            timeout_secs,
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            TourError::Environment(
                "OPENAI_API_KEY environment variable must be set before starting the service"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind.to_string(), DEFAULT_BIND);
        assert!(matches!(
            settings.require_api_key(),
            Err(TourError::Environment(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("TOUR_AGENT_BIND", "127.0.0.1:8080"),
            ("TOUR_AGENT_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(settings.require_api_key().unwrap(), "sk-test");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.bind.port(), 8080);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_bad_values_are_environment_errors() {
        let err = Settings::from_lookup(lookup(&[("TOUR_AGENT_BIND", "nowhere")])).unwrap_err();
        assert!(matches!(err, TourError::Environment(_)));

        let err =
            Settings::from_lookup(lookup(&[("TOUR_AGENT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, TourError::Environment(_)));
    }
}
