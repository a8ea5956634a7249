//! Clone helpers for trait objects.
//!
//! `Clone` requires `Sized`, so a `dyn Trait` cannot be cloned directly. The
//! usual workaround is a helper trait with an object-safe `clone_box`,
//! declared as a supertrait of the trait being cloned and blanket-implemented
//! for every `Clone` implementor. [`define_clone_box!`] generates that helper
//! together with `Clone for Box<dyn Trait>`.

/// Define a `clone_box` helper trait for the trait object `dyn $target`.
///
/// Expands to:
/// - `$vis trait $helper { fn clone_box(&self) -> Box<dyn $target>; }`
/// - a blanket impl of `$helper` for every `T: $target + Clone + 'static`
/// - `impl Clone for Box<dyn $target>` delegating to `clone_box`
///
/// `$target` must list `$helper` among its supertraits.
///
/// # Example
/// ```
/// use vc_core::define_clone_box;
///
/// define_clone_box!(pub CloneShape for Shape);
///
/// pub trait Shape: CloneShape {
///     fn sides(&self) -> u32;
/// }
///
/// #[derive(Clone)]
/// struct Square;
///
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
///
/// let shape: Box<dyn Shape> = Box::new(Square);
/// let copy = shape.clone();
/// assert_eq!(copy.sides(), 4);
/// ```
#[macro_export]
macro_rules! define_clone_box {
    ($vis:vis $helper:ident for $target:ident) => {
        #[doc = concat!("Object-safe deep copy of a `dyn ", stringify!($target), "`.")]
        ///
        /// Blanket-implemented for every `Clone` implementor; never implement
        /// it by hand.
        $vis trait $helper {
            /// Clone this value into a fresh, independently owned `Box`.
            fn clone_box(&self) -> ::std::boxed::Box<dyn $target>;
        }

        impl<T: $target + ::std::clone::Clone + 'static> $helper for T {
            fn clone_box(&self) -> ::std::boxed::Box<dyn $target> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }
        }

        impl ::std::clone::Clone for ::std::boxed::Box<dyn $target> {
            fn clone(&self) -> Self {
                $helper::clone_box(&**self)
            }
        }
    };
}
