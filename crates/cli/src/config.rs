//! Environment configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use tallygen_core::DomainError;
use tallygen_generator::{CompanyProfile, profiles};

pub const PROFILE_VAR: &str = "TALLYGEN_PROFILE";
pub const SEED_VAR: &str = "TALLYGEN_SEED";
pub const OUTPUT_VAR: &str = "TALLYGEN_OUTPUT";
pub const START_VAR: &str = "TALLYGEN_START";
pub const END_VAR: &str = "TALLYGEN_END";

pub const DEFAULT_PROFILE: &str = "trading";
pub const DEFAULT_OUTPUT: &str = "vouchers.xml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },

    #[error("{var} must be a YYYY-MM-DD date, got {value:?}: {source}")]
    InvalidDate {
        var: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown profile {0:?} (expected one of: trading, services, or a .json file)")]
    UnknownProfile(String),

    #[error("failed to read profile {}: {source}", .path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {}: {source}", .path.display())]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] DomainError),
}

/// Where the company profile comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    BuiltIn(String),
    File(PathBuf),
}

impl ProfileSource {
    /// Values ending in `.json` are paths; anything else names a built-in profile.
    pub fn parse(value: &str) -> Self {
        if value.ends_with(".json") {
            ProfileSource::File(PathBuf::from(value))
        } else {
            ProfileSource::BuiltIn(value.to_string())
        }
    }

    pub fn load(&self) -> Result<CompanyProfile, ConfigError> {
        match self {
            ProfileSource::BuiltIn(name) => profiles::by_name(name).map_err(|e| match e {
                DomainError::NotFound(_) => ConfigError::UnknownProfile(name.clone()),
                other => ConfigError::InvalidProfile(other),
            }),
            ProfileSource::File(path) => load_profile_file(path),
        }
    }
}

impl core::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProfileSource::BuiltIn(name) => f.write_str(name),
            ProfileSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_profile_file(path: &Path) -> Result<CompanyProfile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ProfileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings for one run. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub profile: ProfileSource,
    /// `None` means a fresh seed from OS entropy.
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileSource::BuiltIn(DEFAULT_PROFILE.to_string()),
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            start: None,
            end: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        match get(PROFILE_VAR) {
            Some(value) => config.profile = ProfileSource::parse(value.trim()),
            None => tracing::info!("{PROFILE_VAR} not set; using {DEFAULT_PROFILE} profile"),
        }

        if let Some(value) = get(SEED_VAR) {
            let seed = value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(value) = get(OUTPUT_VAR) {
            config.output = PathBuf::from(value);
        }

        config.start = get(START_VAR).map(|v| parse_date(START_VAR, &v)).transpose()?;
        config.end = get(END_VAR).map(|v| parse_date(END_VAR, &v)).transpose()?;

        Ok(config)
    }

    /// Loads the profile and applies the window overrides.
    pub fn load_profile(&self) -> Result<CompanyProfile, ConfigError> {
        let mut profile = self.profile.load()?;
        if let Some(start) = self.start {
            profile.window.start = start;
        }
        if let Some(end) = self.end {
            profile.window.end = end;
        }
        profile.validate()?;
        Ok(profile)
    }
}

fn parse_date(var: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| ConfigError::InvalidDate {
        var,
        value: value.to_string(),
        source,
    })
}
