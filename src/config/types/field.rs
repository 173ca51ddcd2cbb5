//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field, e.g. `footer.links[1].items[0].to`.
///
/// Static paths are built with [`FieldPath::new`] in const context;
/// paths into arrays are built at resolve time with [`FieldPath::key`]
/// and [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// const ITEMS: FieldPath = FieldPath::new("navbar.items");
///
/// let path = ITEMS.index(2).key("href");
/// assert_eq!(path.as_str(), "navbar.items[2].href");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a child key.
    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            return Self(Cow::Owned(name.to_owned()));
        }
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    /// Path to an array element.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FieldPath {
    fn from(path: &'static str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}
