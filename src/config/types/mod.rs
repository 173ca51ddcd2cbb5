//! Configuration utility types.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `error`  | ConfigError, LoadError and collected findings  |
//! | `field`  | Field paths for diagnostics                    |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, LoadError};
pub use field::FieldPath;
