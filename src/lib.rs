//! docsite - site configuration resolver for a static documentation site.
//!
//! Reads `site.toml` into a [`RawConfig`], validates it and fills in
//! defaults, and hands the renderer an immutable [`ResolvedConfig`].
//!
//! ```ignore
//! let raw = docsite::RawConfig::from_str(&std::fs::read_to_string("site.toml")?)?;
//! let config = docsite::resolve(raw)?;
//! println!("{}", config.default_locale().code);
//! ```

pub mod cli;
pub mod config;
pub mod embed;
pub mod logger;
pub mod utils;

pub use config::{
    ConfigDiagnostics, ConfigError, ConfigResolver, RawConfig, ResolvedConfig, resolve,
};
