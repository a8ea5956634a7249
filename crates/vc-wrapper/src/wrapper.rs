//! `Wrapper` — a value type over a polymorphic payload.
//!
//! A `Wrapper` exclusively owns one `Box<dyn Interface>`. Copying the wrapper
//! deep-copies the payload through [`CloneInterface::clone_box`], so the copy
//! holds the same concrete variant as the original and shares nothing with
//! it.
//!
//! | Operation | Rust |
//! |-----|------|
//! | factory | [`Wrapper::create`] |
//! | take ownership of an instance | [`Wrapper::new`], [`Wrapper::from_impl`], `From` |
//! | copy construction | [`Clone::clone`] |
//! | copy assignment | [`Clone::clone_from`] |
//! | query | [`Wrapper::foo`] |

use std::fmt;

use tracing::debug;
use vc_core::{CloneInterface, Integer, Interface, Result};
use vc_variants::Variant;

/// Owns exactly one polymorphic payload and copies it by value.
pub struct Wrapper {
    payload: Box<dyn Interface>,
}

impl Wrapper {
    /// Build a wrapper around a fresh instance of the variant named `name`.
    ///
    /// Recognised names are exactly `"impl 1"` and `"impl 2"`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelector`](vc_core::Error::InvalidSelector),
    /// carrying `name`, for any other string.
    pub fn create(name: &str) -> Result<Self> {
        let variant = name.parse::<Variant>().map_err(|err| {
            debug!(selector = name, "rejected unknown selector");
            err
        })?;
        debug!(selector = name, %variant, "creating wrapper");
        Ok(Self::from(variant))
    }

    /// Take ownership of an existing payload.
    pub fn new(payload: Box<dyn Interface>) -> Self {
        Self { payload }
    }

    /// Box `payload` and take ownership of it.
    pub fn from_impl<T: Interface>(payload: T) -> Self {
        Self::new(Box::new(payload))
    }

    /// Delegate to the payload's [`Interface::foo`].
    pub fn foo(&self) -> Integer {
        self.payload.foo()
    }

    /// Borrow the payload.
    pub fn payload(&self) -> &dyn Interface {
        &*self.payload
    }

    /// Give up the wrapper and return the payload.
    pub fn into_payload(self) -> Box<dyn Interface> {
        self.payload
    }

    /// Return `true` if the payload's concrete type is `T`.
    pub fn is<T: Interface>(&self) -> bool {
        self.payload().is::<T>()
    }

    /// Borrow the payload as its concrete type, if it is a `T`.
    pub fn downcast_ref<T: Interface>(&self) -> Option<&T> {
        self.payload().downcast_ref::<T>()
    }
}

impl Clone for Wrapper {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone_box(),
        }
    }

    /// The source payload is cloned before the current one is dropped.
    fn clone_from(&mut self, source: &Self) {
        let payload = source.payload.clone_box();
        self.payload = payload;
    }
}

impl From<Box<dyn Interface>> for Wrapper {
    fn from(payload: Box<dyn Interface>) -> Self {
        Self::new(payload)
    }
}

impl From<Variant> for Wrapper {
    fn from(variant: Variant) -> Self {
        Self::new(variant.instantiate())
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapper({:?})", self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::Error;
    use vc_variants::{Impl1, Impl2};

    #[test]
    fn create_known_selectors() {
        let one = Wrapper::create("impl 1").unwrap();
        let two = Wrapper::create("impl 2").unwrap();
        assert_eq!(one.foo(), 1);
        assert_eq!(two.foo(), 2);
        assert!(one.is::<Impl1>());
        assert!(two.is::<Impl2>());
    }

    #[test]
    fn create_unknown_selector() {
        let err = Wrapper::create("bogus").unwrap_err();
        assert_eq!(err, Error::InvalidSelector("bogus".to_string()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn from_variant_uses_concrete_type() {
        let w = Wrapper::from(Variant::Impl2);
        assert!(w.is::<Impl2>());
        assert!(!w.is::<Variant>());
    }

    #[test]
    fn variant_can_itself_be_the_payload() {
        let w = Wrapper::from_impl(Variant::Impl1);
        assert_eq!(w.foo(), 1);
        assert_eq!(w.clone().downcast_ref::<Variant>(), Some(&Variant::Impl1));
    }

    #[test]
    fn clone_from_replaces_variant() {
        let mut target = Wrapper::from_impl(Impl1);
        let source = Wrapper::from_impl(Impl2);
        target.clone_from(&source);
        assert_eq!(target.foo(), 2);
        assert!(target.is::<Impl2>());
        assert_eq!(source.foo(), 2);
    }

    #[test]
    fn into_payload_keeps_concrete_type() {
        let payload = Wrapper::from_impl(Impl2).into_payload();
        assert!(payload.is::<Impl2>());
    }

    #[test]
    fn debug_shows_payload() {
        assert_eq!(format!("{:?}", Wrapper::from_impl(Impl1)), "Wrapper(Impl1)");
    }
}
