//! chain-map: a separate-chaining hash map that stores every bucket as a
//! physically contiguous run of one shared doubly linked list, giving
//! stable positions and bucket-grouped iteration.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build ChainedHashMap in small, verifiable layers so each piece
//!   can be reasoned about independently.
//! - Layers:
//!   - NodePool<T> / SlotPool<T>: storage capability handing out stable,
//!     generational references to pooled node slots; the default is a
//!     free-list-backed slab, and callers can inject their own pool.
//!   - ChainList<T, P>: doubly linked list over pooled nodes with O(1)
//!     splice-before, extract-without-destroy, and erase; positions stay
//!     valid across mutations elsewhere in the list.
//!   - ChainedHashMap<K, V, S, P>: public map; one chain descriptor per
//!     bucket records where that bucket's run starts in the list and how
//!     long it is.
//!
//! Constraints
//! - Single-threaded mutation: all structural changes take `&mut self`, so
//!   the borrow checker serializes them; `&self` reads are safe to share
//!   across threads when `K`, `V`, `S`, `P` allow it.
//! - Contiguity: entries of one bucket always occupy one contiguous run of
//!   the list. Insert prepends at the run start; erase of a surviving
//!   run's first entry advances the descriptor; rehash rebuilds the
//!   descriptor array and resplices every node in one linear pass.
//! - Amortized O(1) insert: the bucket array doubles whenever an insert
//!   would push `len / bucket_count` past the configured bound.
//!
//! Why this split?
//! - Localize invariants: the list knows nothing about hashing, the pool
//!   knows nothing about links, and only the map layer maintains the
//!   bucket/run bookkeeping.
//! - Minimize unsafe: the single unsafe site is the list's mutable
//!   iterator, justified by the pool's disjoint-storage contract.
//!
//! Hasher and rehashing invariants
//! - Each entry stores a precomputed `u64` hash and every later operation
//!   (lookup pre-filter, erase, rehash) uses the stored hash; `K: Hash` is
//!   never invoked after insertion. Equal keys must hash equally for the
//!   bucket bookkeeping to hold, as with any hash map.
//!
//! Ordering guarantees (and non-guarantees)
//! - Iteration follows the list: one bucket's entries are consecutive, but
//!   bucket groups sit wherever insertion and rehash history left them,
//!   never necessarily in ascending bucket index, and the order is stable
//!   only until the next mutation.
//!
//! Notes and non-goals
//! - No internal synchronization; concurrent mutation is ruled out by the
//!   API rather than detected at runtime.
//! - No persistence or serialization of the map itself.
//! - Checked lookup (`at`) reports `KeyNotFound`; the get-or-insert
//!   accessor creates a default entry instead. Internal inconsistencies
//!   panic immediately rather than corrupting further.

pub mod chain_list;
pub mod chained_map;
mod chained_map_proptest;
pub mod pool;

// Public surface
pub use chain_list::{ChainList, Node, Pos};
pub use chained_map::{
    ChainedHashMap, Entry, LookupError, Removed, DEFAULT_BUCKETS, DEFAULT_MAX_LOAD_FACTOR,
};
pub use pool::{NodePool, NodeRef, SlotPool};
