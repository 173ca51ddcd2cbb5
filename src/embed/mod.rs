//! Embedded static resources.
//!
//! # Usage
//!
//! ```ignore
//! use embed::{SITE_TOML, SiteTomlVars};
//!
//! let toml = SITE_TOML.render(&SiteTomlVars {
//!     title: "Python Course",
//!     url: "https://python.example.com",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

/// Variables for the starter `site.toml`.
pub struct SiteTomlVars<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

impl TemplateVars for SiteTomlVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__DOCSITE_VERSION__", env!("CARGO_PKG_VERSION"))
            .replace("__DOCSITE_TITLE__", &escape_basic_string(self.title))
            .replace("__DOCSITE_URL__", &escape_basic_string(self.url))
    }
}

/// Escape a value spliced between the quotes of a TOML basic string.
fn escape_basic_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Starter configuration written by `docsite init`.
pub const SITE_TOML: Template<SiteTomlVars<'static>> = Template::new(include_str!("site.toml"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RawConfig, resolve};
    use crate::config::section::{FooterStyle, LinkTarget, NavItem, TextDirection};

    fn render(title: &str) -> String {
        SITE_TOML.render(&SiteTomlVars {
            title,
            url: "https://python.example.com",
        })
    }

    #[test]
    fn test_placeholders_replaced() {
        let content = render("Python Course");
        assert!(!content.contains("__DOCSITE_"));
        assert!(content.contains(env!("CARGO_PKG_VERSION")));
        assert!(SITE_TOML.content().contains("__DOCSITE_TITLE__"));
    }

    #[test]
    fn test_title_escaped() {
        let (raw, _) = RawConfig::parse_with_ignored(&render("Fluffy's \"Python\" Course")).unwrap();
        assert_eq!(raw.title.as_deref(), Some("Fluffy's \"Python\" Course"));
    }

    #[test]
    fn test_url_escaped() {
        let content = SITE_TOML.render(&SiteTomlVars {
            title: "Python Course",
            url: "https://python.example.com/?q=\"x\"",
        });
        let raw = RawConfig::from_str(&content).unwrap();
        assert_eq!(raw.url.as_deref(), Some("https://python.example.com/?q=\"x\""));
    }

    #[test]
    fn test_starter_config_resolves() {
        let (raw, ignored) = RawConfig::parse_with_ignored(&render("Python Course")).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");

        let resolved = resolve(raw).unwrap();
        assert_eq!(resolved.title(), "Python Course");
        assert_eq!(resolved.i18n().codes().collect::<Vec<_>>(), ["en", "fa"]);

        let en = resolved.i18n().get("en").unwrap();
        assert_eq!(en.label, "English");
        assert_eq!(en.html_lang, "en-US");
        assert_eq!(resolved.i18n().get("fa").unwrap().direction, TextDirection::Rtl);

        assert!(matches!(
            &resolved.navbar().items[0],
            NavItem::DocLink { sidebar_id, .. } if sidebar_id == "tutorialSidebar"
        ));
        let logo = resolved.navbar().logo.as_ref().unwrap();
        assert_eq!(logo.alt, "My Site Logo");

        let footer = resolved.footer();
        assert_eq!(footer.style, FooterStyle::Dark);
        assert_eq!(footer.links.len(), 3);
        assert_eq!(footer.targets().count(), 6);
        assert_eq!(
            footer.links[2].items[0].target,
            LinkTarget::Internal("/blog".into())
        );

        assert_eq!(resolved.theme().prism.dark_theme, "dracula");
        assert!(resolved.blog().show_reading_time);
    }

    #[test]
    fn test_starter_config_idempotent() {
        let raw = RawConfig::from_str(&render("Python Course")).unwrap();
        let resolved = resolve(raw).unwrap();
        assert_eq!(resolve(RawConfig::from(&resolved)).unwrap(), resolved);
    }
}
