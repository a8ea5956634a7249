//! # vc-wrapper
//!
//! The value-semantic [`Wrapper`] over a polymorphic payload, and its
//! string-keyed factory.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Wrapper` and `Wrapper::create`.
pub mod wrapper;

pub use wrapper::Wrapper;
