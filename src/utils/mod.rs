//! Utility modules.

mod plural;

pub use plural::{plural_count, plural_s};
