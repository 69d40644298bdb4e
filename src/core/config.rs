use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// How optional fields that were explicitly set to a "falsy" value are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalFieldPolicy {
    /// Emit an optional field whenever it was set, e.g. `"focus_on_load": false`.
    #[default]
    Presence,
    /// Drop set-but-falsy values (`false`, `""`, `"0"`, `[]`) the way the legacy
    /// PHP notifications builder did.
    DropFalsy,
}

/// Whether `initial_options` must be a subset of `options`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialOptionsPolicy {
    /// Each initial option must match an existing option and at most 10 are allowed.
    #[default]
    Strict,
    /// Accept any valid option object.
    Relaxed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockKitConfig {
    pub optional_fields: OptionalFieldPolicy,
    pub initial_options: InitialOptionsPolicy,
}

pub const OPTIONAL_FIELDS_VAR: &str = "BLOCKKIT_OPTIONAL_FIELDS";
pub const INITIAL_OPTIONS_VAR: &str = "BLOCKKIT_INITIAL_OPTIONS";

impl BlockKitConfig {
    /// Load the configuration from `BLOCKKIT_*` environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable holds an unknown policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BlockKitConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value holds an unknown policy name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(OPTIONAL_FIELDS_VAR) {
            config.optional_fields = raw.parse().map_err(|()| ConfigError::InvalidValue {
                key: OPTIONAL_FIELDS_VAR,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(INITIAL_OPTIONS_VAR) {
            config.initial_options = raw.parse().map_err(|()| ConfigError::InvalidValue {
                key: INITIAL_OPTIONS_VAR,
                value: raw.clone(),
            })?;
        }

        tracing::debug!(
            optional_fields = %config.optional_fields,
            initial_options = %config.initial_options,
            "Loaded Block Kit configuration"
        );
        Ok(config)
    }
}

impl FromStr for OptionalFieldPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(Self::Presence),
            "drop_falsy" => Ok(Self::DropFalsy),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OptionalFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presence => write!(f, "presence"),
            Self::DropFalsy => write!(f, "drop_falsy"),
        }
    }
}

impl FromStr for InitialOptionsPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            _ => Err(()),
        }
    }
}

impl fmt::Display for InitialOptionsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Relaxed => write!(f, "relaxed"),
        }
    }
}
