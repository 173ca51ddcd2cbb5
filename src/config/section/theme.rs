//! `[theme]` section: syntax highlighting, color mode and custom CSS.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = ["css/custom.css"]
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! additional_languages = ["bash", "toml"]
//!
//! [theme.color_mode]
//! default_mode = "dark"
//! respect_prefers_color_scheme = true
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, defaults};
use serde::{Deserialize, Serialize};

const PRISM_THEME: FieldPath = FieldPath::new("theme.prism.theme");
const PRISM_DARK_THEME: FieldPath = FieldPath::new("theme.prism.dark_theme");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

// ============================================================================
// Raw
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTheme {
    pub prism: RawPrism,
    pub color_mode: RawColorModeConfig,
    pub custom_css: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPrism {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
    pub additional_languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawColorModeConfig {
    pub default_mode: Option<ColorMode>,
    pub disable_switch: Option<bool>,
    pub respect_prefers_color_scheme: Option<bool>,
}

// ============================================================================
// Resolved
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub prism: Prism,
    pub color_mode: ColorModeConfig,
    pub custom_css: Vec<String>,
}

/// Syntax-highlighting themes for light and dark mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prism {
    pub theme: String,
    pub dark_theme: String,
    pub additional_languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorModeConfig {
    pub default_mode: ColorMode,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}

impl Theme {
    pub(crate) fn to_raw(&self) -> RawTheme {
        RawTheme {
            prism: RawPrism {
                theme: Some(self.prism.theme.clone()),
                dark_theme: Some(self.prism.dark_theme.clone()),
                additional_languages: Some(self.prism.additional_languages.clone()),
            },
            color_mode: RawColorModeConfig {
                default_mode: Some(self.color_mode.default_mode),
                disable_switch: Some(self.color_mode.disable_switch),
                respect_prefers_color_scheme: Some(self.color_mode.respect_prefers_color_scheme),
            },
            custom_css: Some(self.custom_css.clone()),
        }
    }
}

impl RawTheme {
    /// Fill theme defaults. Unknown theme names only warn.
    pub(crate) fn resolve(&self, diag: &mut ConfigDiagnostics) -> Theme {
        let theme = self
            .prism
            .theme
            .clone()
            .unwrap_or_else(defaults::theme::prism_theme);
        let dark_theme = self
            .prism
            .dark_theme
            .clone()
            .unwrap_or_else(defaults::theme::prism_dark_theme);

        check_prism_theme(PRISM_THEME, &theme, diag);
        check_prism_theme(PRISM_DARK_THEME, &dark_theme, diag);

        let color_mode = &self.color_mode;
        Theme {
            prism: Prism {
                theme,
                dark_theme,
                additional_languages: self.prism.additional_languages.clone().unwrap_or_default(),
            },
            color_mode: ColorModeConfig {
                default_mode: color_mode
                    .default_mode
                    .unwrap_or(defaults::theme::color_mode()),
                disable_switch: color_mode.disable_switch.unwrap_or(false),
                respect_prefers_color_scheme: color_mode
                    .respect_prefers_color_scheme
                    .unwrap_or(false),
            },
            custom_css: self.custom_css.clone().unwrap_or_default(),
        }
    }
}

fn check_prism_theme(field: FieldPath, name: &str, diag: &mut ConfigDiagnostics) {
    if !defaults::theme::KNOWN_PRISM_THEMES.contains(&name) {
        diag.warn(field, format!("unknown syntax theme `{name}`"));
    }
}
