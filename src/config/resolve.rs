//! Configuration resolution: `RawConfig` in, frozen `ResolvedConfig` out.
//!
//! Resolution never does I/O and never stops at the first problem. Every
//! section is checked, findings are recorded in order (site, i18n, navbar,
//! footer, theme), and the result is either a complete `ResolvedConfig` or
//! the full list of errors.

use super::RawConfig;
use super::section::{Blog, Docs, Footer, I18n, LocaleEntry, Navbar, SiteMeta, Theme};
use super::types::ConfigDiagnostics;
use serde::Serialize;

/// Fully validated site configuration.
///
/// Fields are only reachable through shared references, so a resolved
/// config cannot change after [`resolve`] returns it. It is `Send + Sync`
/// and can be shared across render workers behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    #[serde(flatten)]
    site: SiteMeta,
    i18n: I18n,
    navbar: Navbar,
    footer: Footer,
    theme: Theme,
    docs: Docs,
    blog: Blog,
}

impl ResolvedConfig {
    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    pub fn title(&self) -> &str {
        &self.site.title
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn locales(&self) -> &[LocaleEntry] {
        &self.i18n.locales
    }

    pub fn default_locale(&self) -> &LocaleEntry {
        self.i18n.default_entry()
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn docs(&self) -> &Docs {
        &self.docs
    }

    pub fn blog(&self) -> &Blog {
        &self.blog
    }
}

/// Turns one `RawConfig` into a `ResolvedConfig`.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    raw: RawConfig,
}

impl ConfigResolver {
    pub fn new(raw: RawConfig) -> Self {
        Self { raw }
    }

    /// Resolve, discarding warnings.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.resolve_into(&mut diag).ok_or(diag)
    }

    /// Resolve, recording errors and warnings into `diag`.
    ///
    /// Returns `None` if this run recorded any error.
    pub fn resolve_into(self, diag: &mut ConfigDiagnostics) -> Option<ResolvedConfig> {
        let raw = &self.raw;
        let before = diag.len();

        let site = SiteMeta::resolve(raw, diag);
        let i18n = raw.i18n.resolve(diag);

        let title = site
            .as_ref()
            .map(|site| site.title.as_str())
            .or(raw.title.as_deref())
            .unwrap_or_default();
        let navbar = raw.navbar.resolve(title, diag);
        let footer = raw.footer.resolve(diag);
        let theme = raw.theme.resolve(diag);

        if diag.len() != before {
            return None;
        }

        Some(ResolvedConfig {
            site: site?,
            i18n: i18n?,
            navbar: navbar?,
            footer: footer?,
            theme,
            docs: raw.docs.resolve(),
            blog: raw.blog.resolve(),
        })
    }
}

/// Validate `raw`, fill its defaults and freeze it.
///
/// Fails with every error found, in the order they were found.
pub fn resolve(raw: RawConfig) -> Result<ResolvedConfig, ConfigDiagnostics> {
    ConfigResolver::new(raw).resolve()
}

impl From<&ResolvedConfig> for RawConfig {
    /// A raw config with every field set explicitly. Resolving it gives
    /// back an identical `ResolvedConfig`.
    fn from(resolved: &ResolvedConfig) -> Self {
        let site = &resolved.site;
        Self {
            title: Some(site.title.clone()),
            tagline: Some(site.tagline.clone()),
            url: Some(site.url.to_string()),
            base_url: Some(site.base_url.clone()),
            favicon: Some(site.favicon.clone()),
            image: site.image.clone(),
            organization_name: site.organization_name.clone(),
            project_name: site.project_name.clone(),
            on_broken_links: Some(site.on_broken_links),
            on_broken_markdown_links: Some(site.on_broken_markdown_links),
            i18n: resolved.i18n.to_raw(),
            navbar: resolved.navbar.to_raw(),
            footer: resolved.footer.to_raw(),
            theme: resolved.theme.to_raw(),
            docs: resolved.docs.to_raw(),
            blog: resolved.blog.to_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::{
        LinkTarget, NavItem, NavPosition, RawFooter, RawFooterGroup, RawFooterLink, RawI18n,
        RawNavItem, RawNavbar, TextDirection,
    };
    use crate::config::{ConfigError, FieldPath, test_raw_config};
    use std::sync::Arc;

    fn with_locales(locales: &[&str], default: &str) -> RawConfig {
        RawConfig {
            i18n: RawI18n {
                default_locale: Some(default.into()),
                locales: Some(locales.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            },
            ..test_raw_config()
        }
    }

    fn with_footer_target(to: &str) -> RawConfig {
        RawConfig {
            footer: RawFooter {
                links: vec![RawFooterGroup {
                    title: Some("Docs".into()),
                    items: vec![RawFooterLink {
                        label: Some("Tutorial".into()),
                        to: Some(to.into()),
                        href: None,
                    }],
                }],
                ..Default::default()
            },
            ..test_raw_config()
        }
    }

    fn kinds(diag: &ConfigDiagnostics) -> Vec<ConfigError> {
        diag.kinds().cloned().collect()
    }

    #[test]
    fn test_locale_set_preserved() {
        for locales in [&["en"][..], &["en", "fa"], &["fa", "en", "zh-Hans"]] {
            let resolved = resolve(with_locales(locales, locales[0])).unwrap();
            let codes: Vec<_> = resolved.i18n().codes().collect();
            assert_eq!(codes, locales);
        }
    }

    #[test]
    fn test_undeclared_default_locale_fails() {
        let diag = resolve(with_locales(&["en", "fa"], "de")).unwrap_err();
        assert_eq!(kinds(&diag), [ConfigError::InvalidDefaultLocale("de".into())]);
    }

    #[test]
    fn test_duplicate_locale_fails() {
        let diag = resolve(with_locales(&["en", "en"], "en")).unwrap_err();
        assert_eq!(kinds(&diag), [ConfigError::DuplicateLocale("en".into())]);
    }

    #[test]
    fn test_footer_targets() {
        let diag = resolve(with_footer_target("docs/intro")).unwrap_err();
        assert_eq!(kinds(&diag), [ConfigError::InvalidLink("docs/intro".into())]);

        assert!(resolve(with_footer_target("https://example.com")).is_ok());
        assert!(resolve(with_footer_target("/docs/intro")).is_ok());
    }

    #[test]
    fn test_python_course_end_to_end() {
        let raw = RawConfig {
            title: Some("Python Course".into()),
            navbar: RawNavbar {
                items: vec![RawNavItem::DocLink {
                    sidebar_id: Some("tutorialSidebar".into()),
                    label: Some("Tutorial".into()),
                    position: Some(NavPosition::Left),
                }],
                ..Default::default()
            },
            ..with_locales(&["en", "fa"], "en")
        };
        let resolved = resolve(raw).unwrap();

        assert_eq!(resolved.title(), "Python Course");
        assert_eq!(resolved.i18n().codes().collect::<Vec<_>>(), ["en", "fa"]);
        assert_eq!(resolved.default_locale().code, "en");
        assert_eq!(
            resolved.navbar().items,
            [NavItem::DocLink {
                sidebar_id: "tutorialSidebar".into(),
                label: "Tutorial".into(),
                position: NavPosition::Left,
            }]
        );
        assert_eq!(resolved.locales()[1].direction, TextDirection::Rtl);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let raw = RawConfig {
            base_url: Some("/python-course/".into()),
            ..with_footer_target("https://github.com/facebook/docusaurus")
        };
        let resolved = resolve(raw).unwrap();
        let again = resolve(RawConfig::from(&resolved)).unwrap();
        assert_eq!(again, resolved);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let raw = with_locales(&["en", "fa"], "fa");
        assert_eq!(resolve(raw.clone()).unwrap(), resolve(raw).unwrap());
    }

    #[test]
    fn test_all_errors_collected_in_section_order() {
        let raw = RawConfig {
            title: None,
            navbar: RawNavbar {
                items: vec![RawNavItem::ExternalLink {
                    href: Some("github.com".into()),
                    label: None,
                    position: None,
                }],
                ..Default::default()
            },
            ..with_footer_target("blog")
        };
        let raw = RawConfig {
            i18n: with_locales(&["en", "en"], "fa").i18n,
            ..raw
        };

        let diag = resolve(raw).unwrap_err();
        assert_eq!(
            kinds(&diag),
            [
                ConfigError::MissingField(FieldPath::new("title")),
                ConfigError::DuplicateLocale("en".into()),
                ConfigError::InvalidDefaultLocale("fa".into()),
                ConfigError::InvalidLink("github.com".into()),
                ConfigError::InvalidLink("blog".into()),
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut raw = test_raw_config();
        raw.theme.prism.theme = Some("solarized".into());

        let mut diag = ConfigDiagnostics::new();
        let resolved = ConfigResolver::new(raw).resolve_into(&mut diag);
        assert!(resolved.is_some());
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolvedConfig>();

        let resolved = Arc::new(resolve(with_footer_target("/docs/intro")).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = Arc::clone(&resolved);
                std::thread::spawn(move || config.footer().targets().count())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(
            resolved.footer().links[0].items[0].target,
            LinkTarget::Internal("/docs/intro".into())
        );
    }

    #[test]
    fn test_serializes_flat_site_fields() {
        let resolved = resolve(test_raw_config()).unwrap();
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["title"], "Python Course");
        assert_eq!(json["url"], "https://python.example.com/");
        assert_eq!(json["i18n"]["locales"][0]["direction"], "ltr");
        assert_eq!(json["theme"]["prism"]["dark_theme"], "dracula");
    }
}
