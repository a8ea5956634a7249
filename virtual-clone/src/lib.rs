//! # virtual-clone
//!
//! Value-semantic wrappers over polymorphic payloads.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `vc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use virtual_clone::Wrapper;
//!
//! let original = Wrapper::create("impl 2")?;
//! let copy = original.clone();
//! assert_eq!(copy.foo(), 2);
//!
//! assert!(Wrapper::create("impl 9").is_err());
//! # Ok::<(), virtual_clone::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Variant`], encoded as its
//!   selector string.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Capability set, clone helpers, and error definitions.
pub use vc_core as core;

/// Built-in payload variants.
pub use vc_variants as variants;

/// The value wrapper and its factory.
pub use vc_wrapper as wrapper;

pub use vc_core::{CloneInterface, Error, Integer, Interface, Result};
pub use vc_variants::{Impl1, Impl2, Variant};
pub use vc_wrapper::Wrapper;
