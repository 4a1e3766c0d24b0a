//! Build environment selection.
//!
//! Every assembly decision that differs between the preview server and a
//! final render branches on [`Environment`]. The enum carries exactly two
//! variants so each branch point is forced to handle both explicitly.

use serde::{Deserialize, Serialize};

/// The mode a bundle is assembled for.
///
/// `Development` serves the interactive preview (hot reload, fast refresh,
/// error overlay). `Production` produces the bundle consumed by the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Interactive preview with hot reload.
    Development,
    /// Final bundle for rendering.
    Production,
}

impl Environment {
    /// Canonical lowercase name, as embedded in cache namespaces.
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// True in the preview environment.
    pub const fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Invalid environment: {}", other)),
        }
    }
}
