//! Runtime environment classification
//!
//! The hosting platform exposes two independent flags at process start: whether
//! this is a preview deployment, and whether the build is a non-production one.
//! Either flag being set puts the application in development mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};

/// Set to `preview` by the hosting platform on preview deployments.
pub const PREVIEW_ENV_VAR: &str = "VERCEL_ENV";
/// Anything other than `production` (including unset) is a non-production build.
pub const BUILD_MODE_ENV_VAR: &str = "NODE_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            other => Err(RegistryError::Configuration(format!(
                "Unknown environment '{}', expected 'production' or 'development'",
                other
            ))),
        }
    }
}

/// Raw environment signals, captured once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentSignals {
    pub preview: bool,
    pub non_production_build: bool,
}

impl EnvironmentSignals {
    pub fn new(preview: bool, non_production_build: bool) -> Self {
        Self {
            preview,
            non_production_build,
        }
    }

    /// Read the signals from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the signals through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let preview = lookup(PREVIEW_ENV_VAR).as_deref() == Some("preview");
        let non_production_build = lookup(BUILD_MODE_ENV_VAR).as_deref() != Some("production");
        Self {
            preview,
            non_production_build,
        }
    }

    /// Preview flag first, build-mode flag second.
    pub fn classify(&self) -> Environment {
        if self.preview {
            return Environment::Development;
        }
        if self.non_production_build {
            return Environment::Development;
        }
        Environment::Production
    }
}

/// Free-function form of [`EnvironmentSignals::classify`].
pub fn classify_environment(signals: EnvironmentSignals) -> Environment {
    signals.classify()
}
