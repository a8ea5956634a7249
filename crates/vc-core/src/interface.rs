//! The polymorphic capability set shared by every payload variant.
//!
//! [`Interface`] is what a wrapper holds behind a `Box`. Besides its own
//! query it inherits [`CloneInterface`], so a boxed payload can be
//! deep-copied without the caller knowing the concrete type, and [`AsAny`],
//! so the concrete type can be recovered when a caller does want to know it.
//!
//! Implementors only write [`Interface::foo`] and derive `Clone`; both
//! helpers come from blanket impls.

use std::fmt::Debug;

use crate::define_clone_box;
use crate::utilities::any::AsAny;
use crate::Integer;

define_clone_box!(pub CloneInterface for Interface);

/// A polymorphic payload that can be queried and deep-copied.
pub trait Interface: CloneInterface + AsAny + Debug + Send + Sync {
    /// Return the variant-specific value. Pure query.
    fn foo(&self) -> Integer;
}

impl<T: Interface> AsAny for T {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl dyn Interface {
    /// Return `true` if the payload's concrete type is `T`.
    pub fn is<T: Interface>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the payload as its concrete type, if it is a `T`.
    pub fn downcast_ref<T: Interface>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
