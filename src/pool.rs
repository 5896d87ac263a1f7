//! Node storage capability: a pluggable pool that hands out stable
//! references to fixed-size node slots.

use slotmap::{DefaultKey, Key, KeyData, SlotMap};

/// Stable reference to one allocated node inside a [`NodePool`].
///
/// References are generational: once a node is deallocated, its reference
/// stops resolving and is never re-issued for a later allocation, even when
/// the underlying slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef(DefaultKey);

impl NodeRef {
    pub(crate) fn new(key: DefaultKey) -> Self {
        NodeRef(key)
    }

    pub(crate) fn key(self) -> DefaultKey {
        self.0
    }

    /// Round-trips the reference through a `u64`, for pool implementations
    /// that keep their own slot bookkeeping.
    pub fn to_raw(self) -> u64 {
        self.0.data().as_ffi()
    }

    /// Rebuilds a reference from [`NodeRef::to_raw`] output.
    pub fn from_raw(raw: u64) -> Self {
        NodeRef(DefaultKey::from(KeyData::from_ffi(raw)))
    }
}

/// Allocator capability for list nodes.
///
/// A pool owns raw node storage and recycles it; constructing and dropping
/// the payload is the move of `T` into `allocate` and out of `deallocate`.
/// The list built on top only ever asks for one node at a time, so
/// implementations are free to hand out slots from larger blocks.
///
/// # Safety
///
/// Implementations must guarantee that distinct live references returned by
/// `allocate` denote disjoint storage, and that a reference keeps resolving
/// to the same node until it is passed to `deallocate`. Mutable iteration
/// over the list relies on this to hand out non-aliasing `&mut` borrows.
pub unsafe trait NodePool<T> {
    /// Moves `value` into a fresh slot and returns its reference.
    fn allocate(&mut self, value: T) -> NodeRef;

    /// Releases the slot and moves the payload out. Returns `None` when the
    /// reference is stale.
    fn deallocate(&mut self, node: NodeRef) -> Option<T>;

    fn get(&self, node: NodeRef) -> Option<&T>;

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T>;

    /// Number of live nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every slot at once.
    fn clear(&mut self);
}

/// Default pool: a free-list-backed slab with generational keys.
///
/// Freed slots go on an internal free list and are reused by later
/// allocations, so a busy map churns through a bounded set of slots instead
/// of round-tripping the global allocator per node.
#[derive(Debug, Clone)]
pub struct SlotPool<T> {
    slots: SlotMap<DefaultKey, T>,
}

impl<T> SlotPool<T> {
    pub fn new() -> Self {
        SlotPool {
            slots: SlotMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SlotPool {
            slots: SlotMap::with_capacity(capacity),
        }
    }
}

impl<T> Default for SlotPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: SlotMap stores each live key's value in its own slot and never
// re-issues a key after removal, which is exactly the disjointness and
// stability the trait demands.
unsafe impl<T> NodePool<T> for SlotPool<T> {
    fn allocate(&mut self, value: T) -> NodeRef {
        NodeRef::new(self.slots.insert(value))
    }

    fn deallocate(&mut self, node: NodeRef) -> Option<T> {
        self.slots.remove(node.key())
    }

    fn get(&self, node: NodeRef) -> Option<&T> {
        self.slots.get(node.key())
    }

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.slots.get_mut(node.key())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}
