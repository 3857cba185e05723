//! Type erasure into [`Any`].
//!
//! This module corresponds to [`std::any`].

use std::any::Any;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

/// Erases a value's static type, returning it as [`Box<dyn Any>`].
///
/// The value itself is untouched; only its static type is forgotten.
/// Downcast with [`Box::downcast`] or [`Any::downcast_ref`] to get it back.
///
/// # Examples
///
/// ```
/// let dynamic = reshape::erased(7_i32);
///
/// assert_eq!(dynamic.downcast_ref::<i32>(), Some(&7));
/// assert!(dynamic.downcast_ref::<u8>().is_none());
/// ```
#[inline]
pub fn erased<T: Any>(value: T) -> Box<dyn Any> {
    Box::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    use alloc::string::String;

    #[test]
    fn downcast_recovers_the_value() {
        let dynamic = erased(String::from("seven"));
        let recovered = dynamic.downcast::<String>().expect("erased as a String");
        assert_eq!(*recovered, "seven");
    }

    #[test]
    fn wrong_type_does_not_downcast() {
        assert!(erased(7_u32).downcast_ref::<i32>().is_none());
    }
}
