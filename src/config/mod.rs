//! Site configuration for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Raw and resolved forms of each section
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── defaults       # Fixed default table
//! ├── resolve        # ConfigResolver and ResolvedConfig
//! └── mod.rs         # RawConfig and file loading (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | top level        | Title, tagline, url, base_url, project ids     |
//! | `[i18n]`         | Declared locales and per-locale metadata       |
//! | `[navbar]`       | Navbar title, logo and items                   |
//! | `[footer]`       | Footer link groups and copyright               |
//! | `[theme]`        | Syntax themes, color mode, custom CSS          |
//! | `[docs]`/`[blog]`| Content plugin settings                        |

pub mod defaults;
mod resolve;
pub mod section;
pub mod types;
mod util;

pub use resolve::{ConfigResolver, ResolvedConfig, resolve};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, LoadError};
pub use util::{find_config_file, find_config_file_from};

use section::{RawBlog, RawDocs, RawFooter, RawI18n, RawNavbar, RawTheme, ReportingSeverity};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename.
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// raw configuration
// ============================================================================

/// Author-supplied site configuration, as written in `site.toml`.
///
/// Every field is optional here; [`resolve`] decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub favicon: Option<String>,
    pub image: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub on_broken_links: Option<ReportingSeverity>,
    pub on_broken_markdown_links: Option<ReportingSeverity>,

    pub i18n: RawI18n,
    pub navbar: RawNavbar,
    pub footer: RawFooter,
    pub theme: RawTheme,
    pub docs: RawDocs,
    pub blog: RawBlog,
}

impl RawConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), LoadError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Read and parse a config file, collecting any unknown fields.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), LoadError> {
        let content =
            fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }
}

// ============================================================================
// loading
// ============================================================================

/// A config file that resolved successfully.
#[derive(Debug)]
pub struct Loaded {
    pub path: PathBuf,
    pub config: ResolvedConfig,
    /// Warnings only; errors fail the load.
    pub diagnostics: ConfigDiagnostics,
}

/// Read, parse and resolve one config file.
///
/// Unknown keys become warnings. Resolution errors are returned together
/// as [`LoadError::Invalid`].
pub fn load(path: &Path) -> Result<Loaded, LoadError> {
    let (raw, ignored) = RawConfig::from_path(path)?;

    let mut diagnostics = ConfigDiagnostics::new();
    for field in ignored {
        diagnostics.warn(FieldPath::from(field), "unknown field, ignored");
    }

    match ConfigResolver::new(raw).resolve_into(&mut diagnostics) {
        Some(config) => Ok(Loaded {
            path: path.to_path_buf(),
            config,
            diagnostics,
        }),
        None => Err(LoadError::Invalid(diagnostics)),
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Smallest configuration that resolves.
#[cfg(test)]
pub fn test_raw_config() -> RawConfig {
    RawConfig {
        title: Some("Python Course".into()),
        url: Some("https://python.example.com".into()),
        i18n: RawI18n {
            default_locale: Some("en".into()),
            locales: Some(vec!["en".into()]),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> RawConfig {
    let config = format!(
        "title = \"Python Course\"\nurl = \"https://python.example.com\"\n{extra}"
    );
    let (parsed, ignored) = RawConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
