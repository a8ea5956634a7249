//! Error types for virtual-clone.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum defined here.

use thiserror::Error;

/// The top-level error type used throughout virtual-clone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factory was asked for an implementation it does not know.
    ///
    /// Carries the selector exactly as the caller passed it.
    #[error("failed to create impl with type \"{0}\"")]
    InvalidSelector(String),
}

/// Shorthand `Result` type used throughout virtual-clone.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidSelector(..))` built from any string-like value.
///
/// # Example
/// ```
/// use vc_core::{invalid_selector, errors::Result};
/// fn pick(name: &str) -> Result<u8> {
///     match name {
///         "a" => Ok(0),
///         _ => invalid_selector!(name),
///     }
/// }
/// assert!(pick("a").is_ok());
/// assert!(pick("b").is_err());
/// ```
#[macro_export]
macro_rules! invalid_selector {
    ($name:expr) => {
        return Err($crate::errors::Error::InvalidSelector(
            ::std::string::ToString::to_string(&$name),
        ))
    };
}
