//! The four container shapes: records, sequences, maps and sets.
//!
//! Each implements [`Container`](crate::Container). Records, maps and sets
//! keep insertion order; sequences keep index order.

mod assoc_map;
mod record;
mod sequence;
mod unique_set;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

pub use assoc_map::AssocMap;
pub use record::Record;
pub use sequence::{Sequence, MAX_INDEX};
pub use unique_set::UniqueSet;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
