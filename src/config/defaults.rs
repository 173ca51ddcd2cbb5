//! Default values for optional configuration fields.
//!
//! The resolver fills a field from here only when the author left it out.

// ============================================================================
// Site Defaults
// ============================================================================

pub mod site {
    use crate::config::section::ReportingSeverity;

    pub fn tagline() -> String {
        String::new()
    }

    pub fn base_url() -> String {
        "/".into()
    }

    pub fn favicon() -> String {
        "img/favicon.ico".into()
    }

    pub const fn on_broken_links() -> ReportingSeverity {
        ReportingSeverity::Throw
    }

    pub const fn on_broken_markdown_links() -> ReportingSeverity {
        ReportingSeverity::Warn
    }
}

// ============================================================================
// [i18n] Defaults
// ============================================================================

pub mod i18n {
    use crate::config::section::TextDirection;

    /// Primary language subtags written right-to-left.
    const RTL_LANGUAGES: &[&str] = &[
        "ar", "arc", "dv", "fa", "ha", "he", "khw", "ks", "ku", "ps", "sd", "ur", "yi",
    ];

    pub fn path() -> String {
        "i18n".into()
    }

    pub fn calendar() -> String {
        "gregory".into()
    }

    /// Text direction for a locale code, from its primary language subtag.
    ///
    /// `fa` and `fa-IR` are both right-to-left; `en-US` is left-to-right.
    pub fn direction(code: &str) -> TextDirection {
        let language = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&language.as_str()) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

// ============================================================================
// [navbar] Defaults
// ============================================================================

pub mod navbar {
    use crate::config::section::NavPosition;

    pub fn logo_href() -> String {
        "/".into()
    }

    pub const fn position() -> NavPosition {
        NavPosition::Left
    }
}

// ============================================================================
// [footer] Defaults
// ============================================================================

pub mod footer {
    use crate::config::section::FooterStyle;

    pub const fn style() -> FooterStyle {
        FooterStyle::Light
    }
}

// ============================================================================
// [theme] Defaults
// ============================================================================

pub mod theme {
    use crate::config::section::ColorMode;

    /// Syntax-highlighting themes the renderer ships with.
    pub const KNOWN_PRISM_THEMES: &[&str] = &[
        "dracula",
        "duotoneDark",
        "duotoneLight",
        "github",
        "gruvboxMaterialDark",
        "gruvboxMaterialLight",
        "jettwaveDark",
        "jettwaveLight",
        "nightOwl",
        "nightOwlLight",
        "oceanicNext",
        "okaidia",
        "oneDark",
        "oneLight",
        "palenight",
        "shadesOfPurple",
        "synthwave84",
        "ultramin",
        "vsDark",
        "vsLight",
    ];

    pub fn prism_theme() -> String {
        "github".into()
    }

    pub fn prism_dark_theme() -> String {
        "dracula".into()
    }

    pub const fn color_mode() -> ColorMode {
        ColorMode::Light
    }
}

// ============================================================================
// [docs] / [blog] Defaults
// ============================================================================

pub mod preset {
    pub fn sidebar_path() -> String {
        "sidebars.toml".into()
    }

    pub fn docs_route_base_path() -> String {
        "docs".into()
    }

    pub fn blog_route_base_path() -> String {
        "blog".into()
    }

    pub const fn blog_enable() -> bool {
        true
    }

    pub const fn show_reading_time() -> bool {
        false
    }
}
