//! `[footer]` section: link groups and copyright line.
//!
//! Each link sets either `to` or `href`. Both accept any target; the target
//! itself decides whether it is internal or external.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//!
//! [[footer.links]]
//! title = "Docs"
//! items = [{ label = "Tutorial", to = "/docs/intro" }]
//!
//! [[footer.links]]
//! title = "Community"
//! items = [{ label = "Discord", href = "https://discordapp.com/invite/docusaurus" }]
//! ```

use super::LinkTarget;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, defaults};
use serde::{Deserialize, Serialize};

const LINKS: FieldPath = FieldPath::new("footer.links");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    Dark,
}

// ============================================================================
// Raw
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFooter {
    pub style: Option<FooterStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<RawFooterGroup>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFooterGroup {
    pub title: Option<String>,
    pub items: Vec<RawFooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFooterLink {
    pub label: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
}

// ============================================================================
// Resolved
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterGroup>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub target: LinkTarget,
}

impl Footer {
    /// Every link target in the footer, in display order.
    pub fn targets(&self) -> impl Iterator<Item = &LinkTarget> {
        self.links
            .iter()
            .flat_map(|group| group.items.iter().map(|link| &link.target))
    }

    pub(crate) fn to_raw(&self) -> RawFooter {
        RawFooter {
            style: Some(self.style),
            links: self
                .links
                .iter()
                .map(|group| RawFooterGroup {
                    title: Some(group.title.clone()),
                    items: group
                        .items
                        .iter()
                        .map(|link| {
                            let target = Some(link.target.to_string());
                            let (to, href) = if link.target.is_external() {
                                (None, target)
                            } else {
                                (target, None)
                            };
                            RawFooterLink {
                                label: Some(link.label.clone()),
                                to,
                                href,
                            }
                        })
                        .collect(),
                })
                .collect(),
            copyright: self.copyright.clone(),
        }
    }
}

impl RawFooter {
    /// Validate every footer link. Returns `None` if an error was recorded.
    pub(crate) fn resolve(&self, diag: &mut ConfigDiagnostics) -> Option<Footer> {
        let before = diag.len();

        let links: Vec<_> = self
            .links
            .iter()
            .enumerate()
            .filter_map(|(i, group)| group.resolve(LINKS.index(i), diag))
            .collect();

        (diag.len() == before).then(|| Footer {
            style: self.style.unwrap_or(defaults::footer::style()),
            links,
            copyright: self.copyright.clone(),
        })
    }
}

impl RawFooterGroup {
    fn resolve(&self, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<FooterGroup> {
        let before = diag.len();

        if self.title.is_none() {
            diag.missing(field.key("title"));
        }

        let items_field = field.key("items");
        let items: Vec<_> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, link)| link.resolve(items_field.index(i), diag))
            .collect();

        if diag.len() != before {
            return None;
        }
        Some(FooterGroup {
            title: self.title.clone()?,
            items,
        })
    }
}

impl RawFooterLink {
    fn resolve(&self, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<FooterLink> {
        let label = self.label.clone();
        if label.is_none() {
            diag.missing(field.key("label"));
        }

        let (key, target) = match (&self.to, &self.href) {
            (Some(to), None) => ("to", to),
            (None, Some(href)) => ("href", href),
            (None, None) => {
                diag.error_with_hint(
                    field.key("to"),
                    ConfigError::MissingField(field.key("to")),
                    "set `to` for site paths or `href` for external URLs",
                );
                return None;
            }
            (Some(_), Some(href)) => {
                diag.error_with_hint(
                    field.key("href"),
                    ConfigError::InvalidLink(href.clone()),
                    "set either `to` or `href`, not both",
                );
                return None;
            }
        };

        let target = match LinkTarget::parse(target) {
            Ok(target) => target,
            Err(e) => {
                diag.error_with_hint(
                    field.key(key),
                    e,
                    "use a site path starting with '/' or an absolute URL",
                );
                return None;
            }
        };

        Some(FooterLink {
            label: label?,
            target,
        })
    }
}
