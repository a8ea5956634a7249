//! The two concrete payload variants.

use vc_core::{Integer, Interface};

/// Variant 1: always answers `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Impl1;

impl Interface for Impl1 {
    fn foo(&self) -> Integer {
        1
    }
}

/// Variant 2: always answers `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Impl2;

impl Interface for Impl2 {
    fn foo(&self) -> Integer {
        2
    }
}
