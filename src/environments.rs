//! Named backend environment presets.
//!
//! An [`Environment`] selects which CatchAll deployment the client talks to.
//! Self-hosted or mock deployments bypass the presets entirely via
//! [`ClientOptions::with_base_url`](crate::ClientOptions::with_base_url).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named preset identifying which backend endpoint a client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The public production deployment.
    Production,
    /// The pre-release staging deployment.
    Staging,
}

impl Environment {
    /// Base URL the preset resolves to.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.catchall.dev",
            Environment::Staging => "https://api.staging.catchall.dev",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            other => Err(crate::ApiError::Configuration {
                message: format!("unknown environment: {other}"),
            }),
        }
    }
}
