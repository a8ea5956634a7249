//! # vc-variants
//!
//! Built-in payload variants for virtual-clone, and the [`Variant`] selector
//! that names them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Impl1` and `Impl2`.
pub mod impls;

/// The closed `Variant` selector.
pub mod variant;

pub use impls::{Impl1, Impl2};
pub use variant::Variant;
