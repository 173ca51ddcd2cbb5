//! `[navbar]` section.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "Fluffy's Python Course"
//! logo = { alt = "My Site Logo", src = "img/Logo.png" }
//!
//! [[navbar.items]]
//! type = "doc_link"
//! sidebar_id = "tutorialSidebar"
//! label = "Tutorial"
//!
//! [[navbar.items]]
//! type = "external_link"
//! href = "https://github.com/example/python-course"
//! label = "GitHub"
//! position = "right"
//! ```

use super::LinkTarget;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, defaults};
use serde::{Deserialize, Serialize};
use url::Url;

const LOGO: FieldPath = FieldPath::new("navbar.logo");
const ITEMS: FieldPath = FieldPath::new("navbar.items");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    Left,
    Right,
}

// ============================================================================
// Raw
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavbar {
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    pub hide_on_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RawNavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLogo {
    /// Defaults to the site title.
    pub alt: Option<String>,
    pub src: Option<String>,
    pub src_dark: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawNavItem {
    #[serde(alias = "docSidebar")]
    DocLink {
        sidebar_id: Option<String>,
        label: Option<String>,
        position: Option<NavPosition>,
    },
    ExternalLink {
        href: Option<String>,
        label: Option<String>,
        position: Option<NavPosition>,
    },
}

// ============================================================================
// Resolved
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navbar {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub hide_on_scroll: bool,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
    pub src_dark: Option<String>,
    pub href: LinkTarget,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// Opens the named docs sidebar.
    DocLink {
        sidebar_id: String,
        label: String,
        position: NavPosition,
    },
    /// Leaves the site.
    ExternalLink {
        href: Url,
        label: String,
        position: NavPosition,
    },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::DocLink { label, .. } | Self::ExternalLink { label, .. } => label,
        }
    }

    pub fn position(&self) -> NavPosition {
        match self {
            Self::DocLink { position, .. } | Self::ExternalLink { position, .. } => *position,
        }
    }

    fn to_raw(&self) -> RawNavItem {
        match self {
            Self::DocLink {
                sidebar_id,
                label,
                position,
            } => RawNavItem::DocLink {
                sidebar_id: Some(sidebar_id.clone()),
                label: Some(label.clone()),
                position: Some(*position),
            },
            Self::ExternalLink {
                href,
                label,
                position,
            } => RawNavItem::ExternalLink {
                href: Some(href.to_string()),
                label: Some(label.clone()),
                position: Some(*position),
            },
        }
    }
}

impl Navbar {
    pub(crate) fn to_raw(&self) -> RawNavbar {
        RawNavbar {
            title: self.title.clone(),
            logo: self.logo.as_ref().map(|logo| RawLogo {
                alt: Some(logo.alt.clone()),
                src: Some(logo.src.clone()),
                src_dark: logo.src_dark.clone(),
                href: Some(logo.href.to_string()),
            }),
            hide_on_scroll: Some(self.hide_on_scroll),
            items: self.items.iter().map(NavItem::to_raw).collect(),
        }
    }
}

impl RawNavbar {
    /// Validate navbar items and fill defaults.
    ///
    /// `site_title` is the fallback logo alt text. Returns `None` if an
    /// error was recorded.
    pub(crate) fn resolve(&self, site_title: &str, diag: &mut ConfigDiagnostics) -> Option<Navbar> {
        let before = diag.len();

        let logo = self
            .logo
            .as_ref()
            .and_then(|logo| logo.resolve(site_title, diag));

        let items: Vec<_> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.resolve(ITEMS.index(i), diag))
            .collect();

        (diag.len() == before).then(|| Navbar {
            title: self.title.clone(),
            logo,
            hide_on_scroll: self.hide_on_scroll.unwrap_or(false),
            items,
        })
    }
}

impl RawLogo {
    fn resolve(&self, site_title: &str, diag: &mut ConfigDiagnostics) -> Option<Logo> {
        let href = self.href.clone().unwrap_or_else(defaults::navbar::logo_href);
        let href = LinkTarget::parse(&href)
            .map_err(|e| diag.error(LOGO.key("href"), e))
            .ok();

        let src = match self.src.as_deref() {
            Some(src) if !src.is_empty() => Some(src.to_owned()),
            _ => {
                diag.missing(LOGO.key("src"));
                None
            }
        };

        Some(Logo {
            alt: self.alt.clone().unwrap_or_else(|| site_title.to_owned()),
            src: src?,
            src_dark: self.src_dark.clone(),
            href: href?,
        })
    }
}

impl RawNavItem {
    fn resolve(&self, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<NavItem> {
        match self {
            Self::DocLink {
                sidebar_id,
                label,
                position,
            } => {
                let Some(sidebar_id) = sidebar_id else {
                    diag.missing(field.key("sidebar_id"));
                    return None;
                };
                if sidebar_id.trim().is_empty() {
                    diag.error_with_hint(
                        field.key("sidebar_id"),
                        ConfigError::InvalidLink(sidebar_id.clone()),
                        "name the sidebar this item opens, e.g. \"tutorialSidebar\"",
                    );
                    return None;
                }
                Some(NavItem::DocLink {
                    sidebar_id: sidebar_id.clone(),
                    label: label.clone().unwrap_or_else(|| sidebar_id.clone()),
                    position: position.unwrap_or(defaults::navbar::position()),
                })
            }
            Self::ExternalLink {
                href,
                label,
                position,
            } => {
                let Some(href) = href else {
                    diag.missing(field.key("href"));
                    return None;
                };
                let url = match LinkTarget::parse_external(href) {
                    Ok(url) => url,
                    Err(e) => {
                        diag.error_with_hint(
                            field.key("href"),
                            e,
                            "external links need an absolute URL, e.g. \"https://github.com/you\"",
                        );
                        return None;
                    }
                };
                Some(NavItem::ExternalLink {
                    href: url,
                    label: label.clone().unwrap_or_else(|| href.clone()),
                    position: position.unwrap_or(defaults::navbar::position()),
                })
            }
        }
    }
}
