//! # Landing page configuration — `alumni.toml`
//!
//! Every field has a default, so a missing or empty file is the same as
//! the built-in configuration.
//!
//! ```toml
//! [latency]
//! signup_ms = 800        # simulated signup round-trip
//! login_ms = 600         # simulated login round-trip
//!
//! [directory]
//! year_placeholder = "—" # shown when a signup leaves the year blank
//!
//! [[directory.seed]]     # replaces the sample profiles when present
//! id = "a1"
//! name = "Priya Sharma"
//! year = "2016"
//! bio = "Software engineer"
//! avatar = "PS"
//! user_type = "Pass Out"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{sample_profiles, Profile};

/// Top-level configuration stored in `alumni.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Simulated network latency of the mock auth actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_signup_ms")]
    pub signup_ms: u64,
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
}

fn default_signup_ms() -> u64 {
    800
}

fn default_login_ms() -> u64 {
    600
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            signup_ms: default_signup_ms(),
            login_ms: default_login_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_year_placeholder")]
    pub year_placeholder: String,
    /// Profiles every session starts with, newest first.
    #[serde(default = "sample_profiles")]
    pub seed: Vec<Profile>,
}

fn default_year_placeholder() -> String {
    "—".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            year_placeholder: default_year_placeholder(),
            seed: sample_profiles(),
        }
    }
}

impl AlumniConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "alumni.toml"
    }

    pub fn signup_latency(&self) -> Duration {
        Duration::from_millis(self.latency.signup_ms)
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.latency.login_ms)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    #[test]
    fn test_empty_file_is_default() {
        let config = AlumniConfig::from_toml("").unwrap();
        assert_eq!(config, AlumniConfig::default());
        assert_eq!(config.signup_latency(), Duration::from_millis(800));
        assert_eq!(config.login_latency(), Duration::from_millis(600));
        assert_eq!(config.directory.year_placeholder, "—");
        assert_eq!(config.directory.seed.len(), 3);
    }

    #[test]
    fn test_partial_sections() {
        let config = AlumniConfig::from_toml("[latency]\nlogin_ms = 50\n").unwrap();
        assert_eq!(config.latency.login_ms, 50);
        assert_eq!(config.latency.signup_ms, 800);
        assert_eq!(config.directory, DirectoryConfig::default());
    }

    #[test]
    fn test_custom_seed() {
        let toml = r#"
            [directory]
            year_placeholder = "n/a"

            [[directory.seed]]
            id = "z9"
            name = "Kiran Das"
            year = "2020"
            avatar = "KD"
            user_type = "In Campus"
        "#;
        let config = AlumniConfig::from_toml(toml).unwrap();
        assert_eq!(config.directory.year_placeholder, "n/a");
        assert_eq!(config.directory.seed.len(), 1);
        let kiran = &config.directory.seed[0];
        assert_eq!(kiran.name, "Kiran Das");
        assert!(kiran.bio.is_empty());
        assert_eq!(kiran.user_type, UserType::InCampus);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AlumniConfig::from_toml("[latency]\nsignup_ms = \"slow\"").is_err());
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let config = AlumniConfig {
            latency: LatencyConfig {
                signup_ms: 0,
                login_ms: 0,
            },
            ..AlumniConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(AlumniConfig::from_toml(&text).unwrap(), config);
    }
}
