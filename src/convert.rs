//! Converter building blocks.
//!
//! This module corresponds to [`std::convert`].

/// Returns its argument unchanged.
///
/// The no-op converter: the default in composition chains, and the key
/// extractor of choice for [`key_set`](crate::collections::key_set) when
/// elements are their own keys. Mirrors [`core::convert::identity`].
///
/// # Examples
///
/// ```
/// assert_eq!(reshape::convert([1, 2, 3], reshape::identity), [1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
