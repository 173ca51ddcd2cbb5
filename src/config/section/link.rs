//! Link target classification shared by navbar and footer.
//!
//! | Target               | Kind       |
//! |----------------------|------------|
//! | `/docs/intro`        | internal   |
//! | `https://github.com` | external   |
//! | `docs/intro`         | invalid    |
//! | `//cdn.example.com`  | invalid    |
//! | `""`                 | invalid    |

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A validated link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Site-relative path, always starting with `/`.
    Internal(String),
    /// Absolute URL with a scheme.
    External(Url),
}

impl LinkTarget {
    /// Classify and validate a raw target string.
    pub fn parse(target: &str) -> Result<Self, ConfigError> {
        // Url::parse trims surrounding whitespace; the target itself must not carry any.
        // Protocol-relative URLs look like paths but leave the site.
        if target.trim() != target || target.starts_with("//") {
            return Err(ConfigError::InvalidLink(target.to_owned()));
        }
        if target.starts_with('/') {
            return Ok(Self::Internal(target.to_owned()));
        }
        Url::parse(target)
            .map(Self::External)
            .map_err(|_| ConfigError::InvalidLink(target.to_owned()))
    }

    /// Parse a target that must be an absolute URL.
    pub fn parse_external(target: &str) -> Result<Url, ConfigError> {
        match Self::parse(target)? {
            Self::External(url) => Ok(url),
            Self::Internal(_) => Err(ConfigError::InvalidLink(target.to_owned())),
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(path) => path,
            Self::External(url) => url.as_str(),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
