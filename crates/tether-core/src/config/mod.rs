//! Configuration system for tether.

use serde::{Deserialize, Serialize};

use crate::copy::{CopyConfig, MAX_PERSONALIZED_TTL_MINUTES};
use crate::error::{TetherError, TetherResult};
use crate::nudge::NudgeConfig;
use crate::policy::PolicyConfig;
use crate::signals::DEFAULT_MOMENTUM_SCALE;
use crate::types::Thresholds;

/// Main engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Risk boundaries and intervention cap.
    pub thresholds: Thresholds,
    /// Delivery-mode bandit settings.
    pub policy: PolicyConfig,
    /// Copy selection settings.
    pub copy: CopyConfig,
    /// Chat nudge settings.
    pub nudge: NudgeConfig,
    /// Momentum limit as a multiple of the scroll threshold.
    pub momentum_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            policy: PolicyConfig::default(),
            copy: CopyConfig::default(),
            nudge: NudgeConfig::default(),
            momentum_scale: DEFAULT_MOMENTUM_SCALE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TetherResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| TetherError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| TetherError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| TetherError::Configuration(e.to_string()))?,
            _ => {
                return Err(TetherError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_parse("TETHER_SCROLL_THRESHOLD_SEC") {
            config.thresholds.scroll_threshold_sec = v;
        }
        if let Some(v) = env_parse("TETHER_PRESENCE_THRESHOLD_SEC") {
            config.thresholds.presence_threshold_sec = v;
        }
        if let Some(v) = env_parse("TETHER_INTERVENTION_CAP") {
            config.thresholds.intervention_cap = v;
        }
        if let Some(v) = env_parse("TETHER_RESISTANCE_THRESHOLD") {
            config.thresholds.resistance_threshold = v;
        }
        if let Some(v) = env_parse("TETHER_EPSILON") {
            config.policy.epsilon = v;
        }
        if let Some(v) = env_parse("TETHER_PERSONALIZED_TTL_MINUTES") {
            config.copy.personalized_ttl_minutes = v;
        }
        if let Some(v) = env_parse("TETHER_MOMENTUM_SCALE") {
            config.momentum_scale = v;
        }

        config
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> TetherResult<()> {
        let t = &self.thresholds;
        let presence_in_range =
            t.presence_threshold_sec >= 0.0 && t.presence_threshold_sec <= t.scroll_threshold_sec;
        if !presence_in_range {
            return Err(TetherError::validation_with_suggestion(
                format!(
                    "presence_threshold_sec ({}) must be between 0 and scroll_threshold_sec ({})",
                    t.presence_threshold_sec, t.scroll_threshold_sec
                ),
                "Lower presence_threshold_sec or raise scroll_threshold_sec",
            ));
        }
        if !(0.0..=1.0).contains(&self.policy.epsilon) {
            return Err(TetherError::validation_with_suggestion(
                format!("epsilon ({}) must be within [0, 1]", self.policy.epsilon),
                "Use a value such as 0.2",
            ));
        }
        let ttl = self.copy.personalized_ttl_minutes;
        if !(1..=MAX_PERSONALIZED_TTL_MINUTES).contains(&ttl) {
            return Err(TetherError::validation(format!(
                "personalized_ttl_minutes ({}) must be between 1 and {}",
                ttl, MAX_PERSONALIZED_TTL_MINUTES
            )));
        }
        if !(self.momentum_scale >= 1.0) {
            return Err(TetherError::validation(format!(
                "momentum_scale ({}) must be at least 1.0",
                self.momentum_scale
            )));
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Builder for EngineConfig.
#[derive(Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set risk thresholds.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Set bandit policy.
    pub fn policy(mut self, policy: PolicyConfig) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set copy selection settings.
    pub fn copy(mut self, copy: CopyConfig) -> Self {
        self.config.copy = copy;
        self
    }

    /// Set chat nudge settings.
    pub fn nudge(mut self, nudge: NudgeConfig) -> Self {
        self.config.nudge = nudge;
        self
    }

    /// Set the momentum scale.
    pub fn momentum_scale(mut self, scale: f64) -> Self {
        self.config.momentum_scale = scale;
        self
    }

    /// Build the configuration, checking invariants.
    pub fn build(self) -> TetherResult<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(ext: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(ext).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.momentum_scale, 1.0);
        assert_eq!(config.copy.personalized_ttl_minutes, 45);
        assert_eq!(config.policy.epsilon, 0.2);
    }

    #[test]
    fn test_from_toml() {
        let file = write_temp(
            ".toml",
            r#"
momentum_scale = 1.5

[thresholds]
scroll_threshold_sec = 240.0
presence_threshold_sec = 120.0

[policy]
epsilon = 0.1
"#,
        );
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.thresholds.scroll_threshold_sec, 240.0);
        assert_eq!(config.thresholds.intervention_cap, 2);
        assert_eq!(config.policy.epsilon, 0.1);
        assert_eq!(config.policy.ignored_penalty, 2.0);
        assert_eq!(config.momentum_scale, 1.5);
    }

    #[test]
    fn test_from_json_and_yaml() {
        let json = write_temp(".json", r#"{"copy": {"personalized_ttl_minutes": 30}}"#);
        assert_eq!(EngineConfig::from_file(json.path()).unwrap().copy.personalized_ttl_minutes, 30);

        let yaml = write_temp(".yaml", "thresholds:\n  intervention_cap: 5\n");
        assert_eq!(EngineConfig::from_file(yaml.path()).unwrap().thresholds.intervention_cap, 5);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".ini", "epsilon=0.2");
        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TetherError::Configuration(_)));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let file = write_temp(".json", r#"{"policy": {"epsilon": 1.5}}"#);
        assert!(matches!(
            EngineConfig::from_file(file.path()),
            Err(TetherError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_thresholds_order() {
        let result = EngineConfig::builder()
            .thresholds(Thresholds {
                scroll_threshold_sec: 60.0,
                presence_threshold_sec: 90.0,
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_momentum_and_ttl() {
        assert!(EngineConfig::builder().momentum_scale(0.5).build().is_err());
        assert!(EngineConfig::builder()
            .copy(CopyConfig {
                personalized_ttl_minutes: 0
            })
            .build()
            .is_err());
        assert!(EngineConfig::builder().momentum_scale(1.5).build().is_ok());
    }

    #[test]
    fn test_validate_ttl_upper_bound() {
        let ttl = |minutes| {
            EngineConfig::builder()
                .copy(CopyConfig {
                    personalized_ttl_minutes: minutes,
                })
                .build()
        };

        assert!(ttl(i64::MAX).is_err());
        assert!(ttl(MAX_PERSONALIZED_TTL_MINUTES + 1).is_err());
        assert!(ttl(MAX_PERSONALIZED_TTL_MINUTES).is_ok());

        std::env::set_var("TETHER_PERSONALIZED_TTL_MINUTES", i64::MAX.to_string());
        let config = EngineConfig::from_env();
        std::env::remove_var("TETHER_PERSONALIZED_TTL_MINUTES");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("TETHER_INTERVENTION_CAP", "7");
        std::env::set_var("TETHER_EPSILON", "not-a-number");
        let config = EngineConfig::from_env();
        std::env::remove_var("TETHER_INTERVENTION_CAP");
        std::env::remove_var("TETHER_EPSILON");

        assert_eq!(config.thresholds.intervention_cap, 7);
        assert_eq!(config.policy.epsilon, 0.2);
    }
}
