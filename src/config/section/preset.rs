//! `[docs]` and `[blog]` content plugin settings.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! sidebar_path = "sidebars.toml"
//!
//! [blog]
//! show_reading_time = true
//! ```

use crate::config::defaults::preset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocs {
    pub sidebar_path: Option<String>,
    pub route_base_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBlog {
    pub enable: Option<bool>,
    pub show_reading_time: Option<bool>,
    pub route_base_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docs {
    /// Sidebar definitions file, relative to the site root.
    pub sidebar_path: String,
    pub route_base_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub enable: bool,
    pub show_reading_time: bool,
    pub route_base_path: String,
}

impl RawDocs {
    pub(crate) fn resolve(&self) -> Docs {
        Docs {
            sidebar_path: self.sidebar_path.clone().unwrap_or_else(preset::sidebar_path),
            route_base_path: self
                .route_base_path
                .clone()
                .unwrap_or_else(preset::docs_route_base_path),
        }
    }
}

impl RawBlog {
    pub(crate) fn resolve(&self) -> Blog {
        Blog {
            enable: self.enable.unwrap_or(preset::blog_enable()),
            show_reading_time: self
                .show_reading_time
                .unwrap_or(preset::show_reading_time()),
            route_base_path: self
                .route_base_path
                .clone()
                .unwrap_or_else(preset::blog_route_base_path),
        }
    }
}

impl Docs {
    pub(crate) fn to_raw(&self) -> RawDocs {
        RawDocs {
            sidebar_path: Some(self.sidebar_path.clone()),
            route_base_path: Some(self.route_base_path.clone()),
        }
    }
}

impl Blog {
    pub(crate) fn to_raw(&self) -> RawBlog {
        RawBlog {
            enable: Some(self.enable),
            show_reading_time: Some(self.show_reading_time),
            route_base_path: Some(self.route_base_path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_defaults() {
        let docs = RawDocs::default().resolve();
        assert_eq!(docs.sidebar_path, "sidebars.toml");
        assert_eq!(docs.route_base_path, "docs");

        let blog = RawBlog::default().resolve();
        assert!(blog.enable);
        assert!(!blog.show_reading_time);
        assert_eq!(blog.route_base_path, "blog");
    }

    #[test]
    fn test_explicit_false_not_overwritten() {
        let blog = RawBlog {
            enable: Some(false),
            show_reading_time: Some(true),
            route_base_path: None,
        }
        .resolve();
        assert!(!blog.enable);
        assert!(blog.show_reading_time);
    }
}
