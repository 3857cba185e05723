//! Owning-cell helpers for [`Box`].
//!
//! This module corresponds to [`std::boxed`].

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

/// Moves a value into a freshly allocated owning cell.
///
/// Every call allocates a new cell; two calls never share storage, even for
/// equal values. The caller holds exclusive ownership of the result.
///
/// # Examples
///
/// ```
/// let cell = reshape::boxed([0_u8; 4]);
/// assert_eq!(*cell, [0, 0, 0, 0]);
/// ```
#[inline]
pub fn boxed<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Takes the value back out of its owning cell, consuming the cell.
///
/// Unlike a raw pointer dereference, this is valid by construction: a
/// [`Box`] always holds a live value, so there is no precondition to
/// violate.
///
/// # Examples
///
/// ```
/// let cell = reshape::boxed(String::from("owned"));
/// assert_eq!(reshape::unboxed(cell), "owned");
/// ```
#[inline]
pub fn unboxed<T>(cell: Box<T>) -> T {
    *cell
}
