//! # vc-core
//!
//! Core trait, clone helpers, and error definitions for virtual-clone.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace – the [`Interface`] capability set, the trait-object
//! clone and upcast helpers it is assembled from, and the error type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `invalid_selector!` macro.
pub mod errors;

/// The `Interface` capability set.
pub mod interface;

/// Trait-object helpers: `define_clone_box!`, `AsAny`.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Integer type returned by payload queries.
pub type Integer = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use interface::{CloneInterface, Interface};
pub use utilities::any::AsAny;
