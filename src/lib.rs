//! A thread-safe, hash-backed set with set algebra.
//!
//! ```
//! use shared_set::Set;
//!
//! let a = Set::from(["a", "b", "c"]);
//! let b = Set::from(["c", "d", "e"]);
//!
//! let mut both = a.intersect(&b).to_vec();
//! both.sort();
//! assert_eq!(both, ["c"]);
//! assert!(a.union(&b).superset(&a));
//! ```

mod macros;
mod set;

pub use set::{FxSet, IntoIter, Iter, Set};
