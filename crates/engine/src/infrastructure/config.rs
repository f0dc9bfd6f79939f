//! Engine configuration from the environment.

use std::path::PathBuf;

use arlenor_domain::RuleRevision;

pub const TABLES_DIR_VAR: &str = "ARLENOR_TABLES_DIR";
pub const ACTORS_PATH_VAR: &str = "ARLENOR_ACTORS_PATH";
pub const RULE_REVISION_VAR: &str = "ARLENOR_RULE_REVISION";

const DEFAULT_ACTORS_PATH: &str = "./data/actors.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory with lookup table overrides; built-in tables when unset
    pub tables_dir: Option<PathBuf>,
    pub actors_path: PathBuf,
    pub rule_revision: RuleRevision,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tables_dir: None,
            actors_path: PathBuf::from(DEFAULT_ACTORS_PATH),
            rule_revision: RuleRevision::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        let rule_revision = match read(RULE_REVISION_VAR) {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                var: RULE_REVISION_VAR,
                message: format!("{}", e),
            })?,
            None => defaults.rule_revision,
        };

        Ok(Self {
            tables_dir: read(TABLES_DIR_VAR).map(PathBuf::from),
            actors_path: read(ACTORS_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.actors_path),
            rule_revision,
        })
    }
}
