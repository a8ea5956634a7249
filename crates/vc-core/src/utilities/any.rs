//! Upcast helper for trait objects.

use std::any::Any;

/// View a value as `&dyn Any` so a trait object can be downcast to its
/// concrete type.
///
/// Not blanket-implemented for every `T: Any`: that would also cover
/// `Box<dyn Trait>`, and autoderef would upcast the box instead of its
/// contents. Each trait that needs it supplies a blanket impl restricted to
/// its own implementors (see
/// [`Interface`](crate::interface::Interface)).
pub trait AsAny: Any {
    /// Return `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}
