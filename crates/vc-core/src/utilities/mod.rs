//! Utilities sub-module: trait-object clone and upcast helpers.

pub mod any;
pub mod clone;
