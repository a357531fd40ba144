//! Ordered sequence containers with pluggable equality and cleanup hooks.
//!
//! This crate provides one contract and two interchangeable backings:
//!
//! ```text
//! Sequence<T>   - the capability contract: indexed access, splicing,
//!                 membership lookup, bracketed rendering
//!     │
//!     ├── LinkedSeq<T>  - node chain in a slab arena; O(1) splicing at a
//!     │                   located position, cursors for mutation-safe
//!     │                   removal mid-traversal
//!     │
//!     └── ArraySeq<T>   - contiguous buffer; O(1) positional access,
//!                         tail-shifting interior splices
//! ```
//!
//! Consumers program against [`Sequence`] and swap backings freely; both
//! report every bad index as an [`OutOfRange`] error and carry the same
//! two hook slots: an equality override for lookups and a disposal hook
//! run once over the live elements at `clear()`/drop.
//!
//! # Quick Start
//!
//! ```
//! use stockpile_collections::{LinkedSeq, Sequence};
//!
//! let mut seq = LinkedSeq::new();
//! seq.push("a");
//! seq.push("b");
//! seq.insert(1, "x").unwrap();
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.remove_at(0).unwrap(), "a");
//! assert_eq!(seq.index_of(&"b"), Some(1));
//! assert_eq!(seq.render_with(|s| s.to_string()), "[x, b]");
//! ```
//!
//! # Removal During Traversal
//!
//! [`LinkedSeq`] cursors unlink the visited element, keep the length in
//! lock-step, and reposition so continued stepping visits every surviving
//! element exactly once:
//!
//! ```
//! use stockpile_collections::{LinkedSeq, Sequence};
//!
//! let mut seq: LinkedSeq<i32> = (0..6).collect();
//!
//! let mut cursor = seq.cursor_front();
//! while let Some(&value) = cursor.current() {
//!     if value % 2 == 0 {
//!         cursor.remove_current();
//!     } else {
//!         cursor.move_next();
//!     }
//! }
//!
//! assert_eq!(seq.to_string(), "[1, 3, 5]");
//! ```
//!
//! # Threading
//!
//! Containers are single-threaded, synchronous values: no operation
//! suspends, and nothing here synchronizes. A host that shares one across
//! threads must serialize access externally.

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod linked;
pub mod seq;

pub use array::ArraySeq;
pub use error::OutOfRange;
pub use linked::{Cursor, Iter, IterMut, LinkedSeq};
pub use seq::{DisposeHook, EqHook, Sequence};
