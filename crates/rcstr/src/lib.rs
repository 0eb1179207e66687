#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Immutable reference-counted strings.
//!
//! [`RcStr`] pairs an immutable heap buffer with a shared reference count.
//! Clones are O(1) handle copies; the buffer is freed exactly once, when
//! the last handle drops. Every value is in one of two states:
//! - **Bound**: holds a shared buffer, count ≥ 1
//! - **Unbound**: the default, valueless state, count 0
//!
//! Sharing is single-threaded by contract (`Rc`, not `Arc`), so handles
//! are neither `Send` nor `Sync`. Equality and ordering are byte-wise;
//! an unbound value sorts below every bound value and equals only other
//! unbound values.

mod error;
mod parse;
mod string;


pub use error::{Error, Result};
pub use string::RcStr;
