//! Top-level site metadata.
//!
//! # Example
//!
//! ```toml
//! title = "Python Course"
//! tagline = "A free python course for everyone"
//! url = "https://python.example.com"
//! base_url = "/"
//! organization_name = "Frisk Technologies"
//! project_name = "python-course"
//! on_broken_links = "throw"
//! ```

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, RawConfig, defaults, util};
use serde::{Deserialize, Serialize};
use url::Url;

const TITLE: FieldPath = FieldPath::new("title");
const URL: FieldPath = FieldPath::new("url");
const BASE_URL: FieldPath = FieldPath::new("base_url");

/// What the renderer does when it meets a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    Ignore,
    Log,
    Warn,
    Throw,
}

/// Resolved site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub tagline: String,
    /// Production origin, e.g. `https://python.example.com/`.
    pub url: Url,
    /// Path under `url` the site is served from; starts and ends with `/`.
    pub base_url: String,
    pub favicon: String,
    /// Social card image.
    pub image: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub on_broken_links: ReportingSeverity,
    pub on_broken_markdown_links: ReportingSeverity,
}

impl SiteMeta {
    /// Validate and default the top-level fields of `raw`.
    ///
    /// Returns `None` if an error was recorded.
    pub(crate) fn resolve(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let title = match raw.title.as_deref() {
            Some(title) if !title.trim().is_empty() => Some(title.to_owned()),
            Some(_) => {
                diag.error_with_hint(
                    TITLE,
                    ConfigError::MissingField(TITLE),
                    "title must not be empty",
                );
                None
            }
            None => {
                diag.missing(TITLE);
                None
            }
        };

        let url = match &raw.url {
            Some(url) => validate_site_url(url, diag),
            None => {
                diag.error_with_hint(
                    URL,
                    ConfigError::MissingField(URL),
                    "set url, e.g.: \"https://example.com\"",
                );
                None
            }
        };

        let base_url = raw.base_url.clone().unwrap_or_else(defaults::site::base_url);
        let base_url_ok = validate_base_url(&base_url, diag);

        Some(Self {
            title: title?,
            tagline: raw.tagline.clone().unwrap_or_else(defaults::site::tagline),
            url: url?,
            base_url: base_url_ok.then_some(base_url)?,
            favicon: raw.favicon.clone().unwrap_or_else(defaults::site::favicon),
            image: raw.image.clone(),
            organization_name: raw.organization_name.clone(),
            project_name: raw.project_name.clone(),
            on_broken_links: raw
                .on_broken_links
                .unwrap_or(defaults::site::on_broken_links()),
            on_broken_markdown_links: raw
                .on_broken_markdown_links
                .unwrap_or(defaults::site::on_broken_markdown_links()),
        })
    }

    /// Full public URL of a site path, honoring `base_url`.
    ///
    /// `"docs/intro"` with base `/course/` gives `https://host/course/docs/intro`.
    pub fn absolute(&self, path: &str) -> Option<Url> {
        let base = self.url.join(&self.base_url).ok()?;
        base.join(path.trim_start_matches('/')).ok()
    }
}

/// `url` must be http(s) with a host. A path component belongs in `base_url`.
fn validate_site_url(url_str: &str, diag: &mut ConfigDiagnostics) -> Option<Url> {
    let invalid = || ConfigError::InvalidLink(url_str.to_owned());

    if url_str.trim() != url_str {
        diag.error_with_hint(URL, invalid(), "remove the surrounding whitespace");
        return None;
    }

    let parsed = match Url::parse(url_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(
                URL,
                invalid(),
                format!("invalid URL ({e}), use format like https://example.com"),
            );
            return None;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        diag.error_with_hint(
            URL,
            invalid(),
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
        );
        return None;
    }

    if parsed.host_str().is_none() {
        diag.error_with_hint(URL, invalid(), "URL must have a valid host");
        return None;
    }

    if let Some(path) = util::extract_url_path(url_str)
        && !path.is_empty()
    {
        diag.warn(
            URL,
            format!("path `/{path}` in url is ignored by the renderer, set base_url = \"/{path}/\" instead"),
        );
    }

    Some(parsed)
}

fn validate_base_url(base_url: &str, diag: &mut ConfigDiagnostics) -> bool {
    if base_url.starts_with('/') && base_url.ends_with('/') && !base_url.starts_with("//") {
        return true;
    }
    diag.error_with_hint(
        BASE_URL,
        ConfigError::InvalidLink(base_url.to_owned()),
        "base_url must start and end with '/', e.g. \"/\" or \"/python-course/\"",
    );
    false
}
