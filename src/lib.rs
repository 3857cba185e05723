//! Element-type conversion, grouping, and reshaping helpers for sequences
//! and maps.
//!
//! Converting a `Vec<Row>` into a `Vec<Summary>`, indexing records by id,
//! or splitting a list into groups all tend to decay into the same
//! hand-written loop. This crate collects those loops into a handful of
//! generic free functions, each a single-pass, pure transformation that
//! consumes its input and returns a freshly allocated container.
//!
//! # Motivation
//!
//! Suppose we load user records and need them indexed by id:
//!
//! ```
//! use std::collections::HashMap;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "ada".into() },
//!     User { id: 2, name: "grace".into() },
//! ];
//!
//! // The loop we keep rewriting:
//! let mut by_id = HashMap::with_capacity(users.len());
//! for user in users.clone() {
//!     by_id.insert(user.id, user);
//! }
//!
//! // This crate's way:
//! assert_eq!(reshape::index_by(users, |user| user.id), by_id);
//! ```
//!
//! The same shape covers element conversion and grouping:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let names = reshape::convert(["ada", "grace"], String::from);
//! assert_eq!(names, ["ada", "grace"]);
//!
//! let by_len = reshape::group_by(["one", "two", "three"], |word| word.len());
//! assert_eq!(
//!     by_len,
//!     HashMap::from([(3, vec!["one", "two"]), (5, vec!["three"])]),
//! );
//! ```
//!
//! # Contracts worth knowing
//!
//! - Every operation consumes its input and returns a newly allocated
//!   container; inputs are never mutated in place and no aliasing is
//!   introduced. Conversion is shallow: element values keep their identity.
//! - Converters and key extractors are plain closures ([`FnMut`]); they are
//!   invoked exactly once per element, in input order. In some cases a
//!   closure's parameter type must be annotated explicitly, a current
//!   limitation of closure type inference.
//! - [`index_by`] resolves key collisions silently: the later element wins.
//!   Read its documentation before trusting it with lossy keys.
//! - Hash-map iteration order is unspecified. [`values`] and the groups of
//!   [`group_by`] come back in no particular order; sort at the call site
//!   when determinism matters.
//!
//! # `no_std` support
//!
//! With `default-features = false` and the `alloc` feature, the [`Vec`]-
//! and [`Box`]-based helpers remain available. The hash-container
//! operations live in [`collections`] and require `std`.
//!
//! [`index_by`]: collections::index_by
//! [`values`]: collections::values
//! [`group_by`]: collections::group_by

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod any;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod boxed;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod collections;
pub mod convert;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod vec;

#[cfg(feature = "alloc")]
pub use any::*;
#[cfg(feature = "alloc")]
pub use boxed::*;
#[cfg(feature = "std")]
pub use collections::*;
pub use convert::*;
#[cfg(feature = "alloc")]
pub use vec::*;
