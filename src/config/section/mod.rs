//! Configuration section definitions.
//!
//! Each section has a raw form (every field optional, deserialized from
//! `site.toml`) and a resolved form (defaults filled, links validated).
//!
//! | Module    | Section                          |
//! |-----------|----------------------------------|
//! | `site`    | top-level metadata               |
//! | `i18n`    | `[i18n]` locales                 |
//! | `navbar`  | `[navbar]` logo and items        |
//! | `footer`  | `[footer]` link groups           |
//! | `theme`   | `[theme]` syntax themes          |
//! | `preset`  | `[docs]`, `[blog]`               |
//! | `link`    | link target classification       |

mod footer;
mod i18n;
mod link;
mod navbar;
mod preset;
mod site;
mod theme;

pub use footer::{Footer, FooterGroup, FooterLink, FooterStyle, RawFooter, RawFooterGroup, RawFooterLink};
pub use i18n::{I18n, LocaleEntry, RawI18n, RawLocaleConfig, TextDirection};
pub use link::LinkTarget;
pub use navbar::{Logo, NavItem, NavPosition, Navbar, RawLogo, RawNavItem, RawNavbar};
pub use preset::{Blog, Docs, RawBlog, RawDocs};
pub use site::{ReportingSeverity, SiteMeta};
pub use theme::{
    ColorMode, ColorModeConfig, Prism, RawColorModeConfig, RawPrism, RawTheme, Theme,
};
