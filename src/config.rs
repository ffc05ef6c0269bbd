use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::answer::{Answerer, BridgeAnswerer, LocalAnswerer, RemoteAnswerer};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswererKind {
    Local,
    Bridge,
    Remote,
}

impl FromStr for AnswererKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "bridge" => Ok(Self::Bridge),
            "remote" => Ok(Self::Remote),
            _ => Err(ConfigError::UnknownAnswerer(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub answerer: AnswererKind,
    pub bridge_cmd: String,
    pub backend_url: String,
    pub timeout_ms: u64,
    pub json_logs: bool,
}

impl AppConfig {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let answerer = match lookup("QA_ANSWERER") {
            Some(value) => value.parse()?,
            None => AnswererKind::Local,
        };

        let bridge_cmd = lookup("QA_BRIDGE_CMD").unwrap_or_default();
        if answerer == AnswererKind::Bridge && bridge_cmd.trim().is_empty() {
            return Err(ConfigError::MissingBridgeCommand);
        }

        let backend_url = lookup("QA_BACKEND_URL")
            .unwrap_or_else(|| "http://127.0.0.1:9000/answer".to_string());

        let timeout_ms = lookup("QA_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        let json_logs = lookup("LOG_FORMAT").is_some_and(|value| value.eq_ignore_ascii_case("json"));

        Ok(Self {
            port,
            answerer,
            bridge_cmd,
            backend_url,
            timeout_ms,
            json_logs,
        })
    }

    /// Construct the configured answer backend.
    pub fn build_answerer(&self) -> Result<Arc<dyn Answerer>, ConfigError> {
        let answerer: Arc<dyn Answerer> = match self.answerer {
            AnswererKind::Local => Arc::new(LocalAnswerer::new()),
            AnswererKind::Bridge => {
                Arc::new(BridgeAnswerer::new(self.bridge_cmd.clone(), self.timeout_ms))
            }
            AnswererKind::Remote => Arc::new(RemoteAnswerer::new(
                reqwest::Client::builder().build()?,
                self.backend_url.clone(),
                self.timeout_ms,
            )),
        };
        Ok(answerer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.answerer, AnswererKind::Local);
        assert_eq!(config.timeout_ms, 30_000);
        assert!(!config.json_logs);
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = load(&[("PORT", "http"), ("QA_TIMEOUT_MS", "-1")]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(matches!(
            load(&[("QA_ANSWERER", "oracle")]),
            Err(ConfigError::UnknownAnswerer(_))
        ));
    }

    #[test]
    fn bridge_requires_command() {
        assert!(matches!(
            load(&[("QA_ANSWERER", "bridge")]),
            Err(ConfigError::MissingBridgeCommand)
        ));

        let config = load(&[("QA_ANSWERER", "Bridge"), ("QA_BRIDGE_CMD", "./answer.sh")]).unwrap();
        assert_eq!(config.build_answerer().unwrap().name(), "bridge");
    }

    #[test]
    fn remote_backend_is_built() {
        let config = load(&[("QA_ANSWERER", "remote"), ("LOG_FORMAT", "JSON")]).unwrap();
        assert!(config.json_logs);
        assert_eq!(config.build_answerer().unwrap().name(), "remote");
    }
}
