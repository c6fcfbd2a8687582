//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// Valid ref ids of one citing item (usually <4).
pub type RefList<'a> = SmallVec<[&'a str; 4]>;
