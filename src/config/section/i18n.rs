//! `[i18n]` section: declared locales and per-locale display metadata.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "fa"]
//!
//! [i18n.locale_configs.en]
//! label = "English"
//! html_lang = "en-US"
//! ```

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, defaults};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const LOCALES: FieldPath = FieldPath::new("i18n.locales");
const DEFAULT_LOCALE: FieldPath = FieldPath::new("i18n.default_locale");
const LOCALE_CONFIGS: FieldPath = FieldPath::new("i18n.locale_configs");

// ============================================================================
// Raw
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawI18n {
    /// Defaults to the first declared locale.
    pub default_locale: Option<String>,

    /// Ordered locale codes. Required and non-empty.
    pub locales: Option<Vec<String>>,

    /// Translations directory.
    pub path: Option<String>,

    /// Per-locale overrides keyed by locale code.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locale_configs: BTreeMap<String, RawLocaleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLocaleConfig {
    pub label: Option<String>,
    pub direction: Option<TextDirection>,
    pub html_lang: Option<String>,
    pub calendar: Option<String>,
    pub path: Option<String>,
}

// ============================================================================
// Resolved
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// A declared locale with every display field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub code: String,
    pub label: String,
    pub direction: TextDirection,
    /// Value of the `<html lang>` attribute.
    pub html_lang: String,
    /// Calendar system identifier, e.g. `gregory` or `persian`.
    pub calendar: String,
    /// Directory of this locale's translations under the i18n path.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18n {
    pub default_locale: String,
    /// Non-empty, duplicate-free, in declaration order.
    pub locales: Vec<LocaleEntry>,
    pub path: String,
}

impl I18n {
    /// Declared locale codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&LocaleEntry> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// The entry for the default locale.
    pub fn default_entry(&self) -> &LocaleEntry {
        self.get(&self.default_locale)
            .unwrap_or(&self.locales[0])
    }

    pub(crate) fn to_raw(&self) -> RawI18n {
        RawI18n {
            default_locale: Some(self.default_locale.clone()),
            locales: Some(self.codes().map(str::to_owned).collect()),
            path: Some(self.path.clone()),
            locale_configs: self
                .locales
                .iter()
                .map(|l| {
                    let raw = RawLocaleConfig {
                        label: Some(l.label.clone()),
                        direction: Some(l.direction),
                        html_lang: Some(l.html_lang.clone()),
                        calendar: Some(l.calendar.clone()),
                        path: Some(l.path.clone()),
                    };
                    (l.code.clone(), raw)
                })
                .collect(),
        }
    }
}

impl RawI18n {
    /// Validate the locale set and fill per-locale defaults.
    ///
    /// Returns `None` if an error was recorded.
    pub(crate) fn resolve(&self, diag: &mut ConfigDiagnostics) -> Option<I18n> {
        let codes = match self.locales.as_deref() {
            Some(codes) if !codes.is_empty() => codes,
            Some(_) => {
                diag.error_with_hint(
                    LOCALES,
                    ConfigError::MissingField(LOCALES),
                    "declare at least one locale, e.g. locales = [\"en\"]",
                );
                return None;
            }
            None => {
                diag.missing(LOCALES);
                return None;
            }
        };

        let mut ok = true;

        // Each repeated code is reported once, at its first repetition
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        for (i, code) in codes.iter().enumerate() {
            if code.trim().is_empty() || code.trim() != code {
                let field = LOCALES.index(i);
                diag.error_with_hint(
                    field.clone(),
                    ConfigError::MissingField(field),
                    format!("locale codes must be non-empty with no surrounding whitespace, got {code:?}"),
                );
                ok = false;
            }
            if !seen.insert(code.as_str()) && reported.insert(code.as_str()) {
                diag.error(LOCALES.index(i), ConfigError::DuplicateLocale(code.clone()));
                ok = false;
            }
        }

        let default_locale = self
            .default_locale
            .clone()
            .unwrap_or_else(|| codes[0].clone());
        if !seen.contains(default_locale.as_str()) {
            diag.error_with_hint(
                DEFAULT_LOCALE,
                ConfigError::InvalidDefaultLocale(default_locale.clone()),
                format!("add it to i18n.locales or use one of: {}", codes.join(", ")),
            );
            ok = false;
        }

        for code in self.locale_configs.keys() {
            if !seen.contains(code.as_str()) {
                diag.warn(
                    LOCALE_CONFIGS.key(code),
                    format!("locale `{code}` is not declared in i18n.locales"),
                );
            }
        }

        if !ok {
            return None;
        }

        let locales = codes
            .iter()
            .map(|code| self.resolve_locale(code))
            .collect();

        Some(I18n {
            default_locale,
            locales,
            path: self.path.clone().unwrap_or_else(defaults::i18n::path),
        })
    }

    fn resolve_locale(&self, code: &str) -> LocaleEntry {
        let overrides = self.locale_configs.get(code).cloned().unwrap_or_default();
        LocaleEntry {
            code: code.to_owned(),
            label: overrides.label.unwrap_or_else(|| code.to_owned()),
            direction: overrides
                .direction
                .unwrap_or_else(|| defaults::i18n::direction(code)),
            html_lang: overrides.html_lang.unwrap_or_else(|| code.to_owned()),
            calendar: overrides.calendar.unwrap_or_else(defaults::i18n::calendar),
            path: overrides.path.unwrap_or_else(|| code.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(locales: &[&str], default: Option<&str>) -> RawI18n {
        RawI18n {
            default_locale: default.map(str::to_owned),
            locales: Some(locales.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn resolve(raw: &RawI18n) -> (Option<I18n>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let i18n = raw.resolve(&mut diag);
        (i18n, diag)
    }

    #[test]
    fn test_locale_defaults() {
        let (i18n, diag) = resolve(&raw(&["en", "fa"], Some("en")));
        let i18n = i18n.unwrap();
        assert!(diag.is_empty());
        assert_eq!(i18n.codes().collect::<Vec<_>>(), ["en", "fa"]);
        assert_eq!(i18n.path, "i18n");

        let fa = i18n.get("fa").unwrap();
        assert_eq!(fa.label, "fa");
        assert_eq!(fa.direction, TextDirection::Rtl);
        assert_eq!(fa.html_lang, "fa");
        assert_eq!(fa.calendar, "gregory");
        assert_eq!(fa.path, "fa");
        assert_eq!(i18n.default_entry().code, "en");
    }

    #[test]
    fn test_explicit_locale_config_not_overwritten() {
        let mut raw = raw(&["en", "fa"], Some("en"));
        raw.locale_configs.insert(
            "en".into(),
            RawLocaleConfig {
                label: Some("English".into()),
                html_lang: Some("en-US".into()),
                ..Default::default()
            },
        );
        raw.locale_configs.insert(
            "fa".into(),
            RawLocaleConfig {
                direction: Some(TextDirection::Ltr),
                calendar: Some("persian".into()),
                ..Default::default()
            },
        );
        let i18n = resolve(&raw).0.unwrap();

        let en = i18n.get("en").unwrap();
        assert_eq!(en.label, "English");
        assert_eq!(en.html_lang, "en-US");
        assert_eq!(en.direction, TextDirection::Ltr);

        let fa = i18n.get("fa").unwrap();
        assert_eq!(fa.direction, TextDirection::Ltr);
        assert_eq!(fa.calendar, "persian");
    }

    #[test]
    fn test_default_locale_falls_back_to_first() {
        let i18n = resolve(&raw(&["fa", "en"], None)).0.unwrap();
        assert_eq!(i18n.default_locale, "fa");
    }

    #[test]
    fn test_default_locale_must_be_declared() {
        let (i18n, diag) = resolve(&raw(&["en", "fa"], Some("de")));
        assert!(i18n.is_none());
        assert_eq!(
            diag.kinds().collect::<Vec<_>>(),
            [&ConfigError::InvalidDefaultLocale("de".into())]
        );
    }

    #[test]
    fn test_duplicate_locale_reported_once() {
        let (i18n, diag) = resolve(&raw(&["en", "en", "fa", "en"], Some("en")));
        assert!(i18n.is_none());
        assert_eq!(
            diag.kinds().collect::<Vec<_>>(),
            [&ConfigError::DuplicateLocale("en".into())]
        );
        assert_eq!(diag.errors()[0].field.as_str(), "i18n.locales[1]");
    }

    #[test]
    fn test_missing_and_empty_locales() {
        let (_, diag) = resolve(&RawI18n::default());
        assert_eq!(
            diag.kinds().collect::<Vec<_>>(),
            [&ConfigError::MissingField(LOCALES)]
        );

        let (_, diag) = resolve(&raw(&[], Some("en")));
        assert_eq!(
            diag.kinds().collect::<Vec<_>>(),
            [&ConfigError::MissingField(LOCALES)]
        );
    }

    #[test]
    fn test_blank_or_padded_locale_codes() {
        let (i18n, diag) = resolve(&raw(&["", " en", "fa"], None));
        assert!(i18n.is_none());
        assert_eq!(
            diag.kinds().collect::<Vec<_>>(),
            [
                &ConfigError::MissingField(LOCALES.index(0)),
                &ConfigError::MissingField(LOCALES.index(1)),
            ]
        );
        assert!(diag.errors()[1].hint.as_deref().unwrap().contains("\" en\""));

        let (i18n, _) = resolve(&raw(&["en", ""], Some("")));
        assert!(i18n.is_none());
    }

    #[test]
    fn test_undeclared_locale_config_warns() {
        let mut raw = raw(&["en"], None);
        raw.locale_configs
            .insert("de".into(), RawLocaleConfig::default());
        let (i18n, diag) = resolve(&raw);
        assert!(i18n.is_some());
        assert_eq!(diag.warnings()[0].0.as_str(), "i18n.locale_configs.de");
    }

    #[test]
    fn test_to_raw_resolves_identically() {
        let i18n = resolve(&raw(&["en", "fa"], Some("fa"))).0.unwrap();
        let again = resolve(&i18n.to_raw()).0.unwrap();
        assert_eq!(i18n, again);
    }
}
