//! `Variant` — the closed set of known payload variants.
//!
//! A `Variant` is both the factory key (parsed from and rendered as the
//! selector strings `"impl 1"` / `"impl 2"`) and a heap-free payload in its
//! own right: it implements [`Interface`] by matching on itself, so code that
//! only ever needs the built-in variants can copy it by value.

use std::fmt;
use std::str::FromStr;

use vc_core::{invalid_selector, Error, Integer, Interface};

use crate::impls::{Impl1, Impl2};

/// One of the built-in payload variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// [`Impl1`], selected by `"impl 1"`.
    #[cfg_attr(feature = "serde", serde(rename = "impl 1"))]
    Impl1,
    /// [`Impl2`], selected by `"impl 2"`.
    #[cfg_attr(feature = "serde", serde(rename = "impl 2"))]
    Impl2,
}

impl Variant {
    /// Every variant, in selector order.
    pub const ALL: [Variant; 2] = [Variant::Impl1, Variant::Impl2];

    /// The selector string for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Impl1 => "impl 1",
            Variant::Impl2 => "impl 2",
        }
    }

    /// Allocate a fresh instance of the matching concrete type.
    pub fn instantiate(self) -> Box<dyn Interface> {
        match self {
            Variant::Impl1 => Box::new(Impl1),
            Variant::Impl2 => Box::new(Impl2),
        }
    }
}

impl Interface for Variant {
    fn foo(&self) -> Integer {
        match self {
            Variant::Impl1 => Impl1.foo(),
            Variant::Impl2 => Impl2.foo(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match against the selector strings.
impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "impl 1" => Ok(Variant::Impl1),
            "impl 2" => Ok(Variant::Impl2),
            _ => invalid_selector!(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_selectors() {
        assert_eq!("impl 1".parse::<Variant>(), Ok(Variant::Impl1));
        assert_eq!("impl 2".parse::<Variant>(), Ok(Variant::Impl2));
    }

    #[test]
    fn parse_is_exact() {
        for bad in ["", "impl 3", "Impl 1", "IMPL 2", " impl 1", "impl 1 ", "impl1"] {
            assert_eq!(
                bad.parse::<Variant>(),
                Err(Error::InvalidSelector(bad.to_string())),
                "selector {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn foo_matches_concrete_type() {
        assert_eq!(Variant::Impl1.foo(), Impl1.foo());
        assert_eq!(Variant::Impl2.foo(), Impl2.foo());
    }

    #[test]
    fn instantiate_allocates_concrete_type() {
        let one = Variant::Impl1.instantiate();
        let two = Variant::Impl2.instantiate();
        assert!(one.is::<Impl1>());
        assert!(two.is::<Impl2>());
        assert!(!one.is::<Variant>());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_selector_strings() {
        let json = serde_json::to_string(&Variant::Impl2).unwrap();
        assert_eq!(json, "\"impl 2\"");
        let back: Variant = serde_json::from_str("\"impl 1\"").unwrap();
        assert_eq!(back, Variant::Impl1);
        assert!(serde_json::from_str::<Variant>("\"impl 3\"").is_err());
    }
}
