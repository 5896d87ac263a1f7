//! ChainedHashMap: separate-chaining hash map whose buckets live as
//! contiguous runs inside one shared [`ChainList`].
//!
//! Layout invariants, maintained by every mutation:
//! - every entry is covered by the chain descriptor at
//!   `stored_hash % bucket_count`;
//! - all entries of one bucket form a single physically contiguous run in
//!   the list, and the descriptor names the first node of that run;
//! - the runs partition the list exactly.
//!
//! Entries cache their hash at insertion and every later operation
//! (lookup pre-filter, erase, rehash) uses the cached value, so `K: Hash`
//! never runs again once a key is stored. Rehash redistributes nodes by
//! extracting and resplicing them inside the same list, relinking pointers
//! only; payloads are never moved or reallocated.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::error::Error;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::chain_list::{self, ChainList, Node, Pos};
use crate::pool::{NodePool, SlotPool};

/// Bucket count a freshly constructed map starts with.
pub const DEFAULT_BUCKETS: usize = 4;

/// Load factor bound used when none is configured.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.75;

#[cold]
#[inline(never)]
fn broken_chain() -> ! {
    panic!("chain descriptor disagrees with the list; map invariants are broken");
}

/// List payload of one map entry: key, value, and the hash cached at
/// insertion time. Opaque; it only appears in pool type parameters.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

/// Per-bucket descriptor: position of the run's first entry (the end
/// position while the bucket is empty) and the run length.
#[derive(Debug, Clone, Copy, Default)]
struct Chain {
    first: Pos,
    len: usize,
}

/// Entry removed by [`ChainedHashMap::erase`], together with the position
/// of the next surviving entry in iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed<K, V> {
    pub key: K,
    pub value: V,
    pub next: Pos,
}

/// Error of the checked accessors [`ChainedHashMap::at`] and
/// [`ChainedHashMap::at_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    KeyNotFound,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::KeyNotFound => f.write_str("key not found"),
        }
    }
}

impl Error for LookupError {}

/// Hash map with stable positions and bucket-contiguous iteration order.
///
/// Iteration visits entries in the underlying list order: entries of one
/// bucket appear consecutively, but bucket groups appear wherever insert
/// and rehash history left them, never necessarily in ascending bucket
/// index. The order is stable only until the next mutation.
///
/// ```
/// use chain_map::ChainedHashMap;
///
/// let mut map = ChainedHashMap::new();
/// let (pos, inserted) = map.insert("a", 1);
/// assert!(inserted);
/// map.insert("b", 2);
/// assert_eq!(map.get_at(pos), Some((&"a", &1)));
/// assert_eq!(map.get(&"b"), Some(&2));
/// ```
pub struct ChainedHashMap<K, V, S = RandomState, P = SlotPool<Node<Entry<K, V>>>> {
    list: ChainList<Entry<K, V>, P>,
    chains: Vec<Chain>,
    max_load_factor: f32,
    hasher: S,
}

impl<K, V> ChainedHashMap<K, V> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_hasher_and_pool(buckets, RandomState::new(), SlotPool::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        Self::with_buckets_hasher_and_pool(buckets, hasher, SlotPool::new())
    }
}

impl<K, V, S, P: NodePool<Node<Entry<K, V>>>> ChainedHashMap<K, V, S, P> {
    /// Fully injected constructor: bucket count, hash capability, and node
    /// storage capability. The load factor bound starts at
    /// [`DEFAULT_MAX_LOAD_FACTOR`].
    pub fn with_buckets_hasher_and_pool(buckets: usize, hasher: S, pool: P) -> Self {
        ChainedHashMap {
            list: ChainList::with_pool(pool),
            chains: vec![Chain::default(); buckets.max(1)],
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.chains.len()
    }

    pub fn load_factor(&self) -> f32 {
        self.list.len() as f32 / self.chains.len() as f32
    }

    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Entries the map holds before the load factor bound forces growth.
    pub fn capacity(&self) -> usize {
        (self.max_load_factor * self.chains.len() as f32) as usize
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Run length of bucket `bucket`.
    ///
    /// # Panics
    ///
    /// Panics if `bucket >= self.bucket_count()`.
    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.chains[bucket].len
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.chains.len() as u64) as usize
    }

    /// Key and value stored at `pos`, or `None` for a stale position.
    pub fn get_at(&self, pos: Pos) -> Option<(&K, &V)> {
        let entry = self.list.get(pos)?;
        Some((&entry.key, &entry.value))
    }

    /// Like [`ChainedHashMap::get_at`], with the value mutable.
    pub fn get_at_mut(&mut self, pos: Pos) -> Option<(&K, &mut V)> {
        let entry = self.list.get_mut(pos)?;
        Some((&entry.key, &mut entry.value))
    }

    pub fn iter(&self) -> Iter<'_, K, V, P> {
        Iter {
            inner: self.list.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, P> {
        IterMut {
            inner: self.list.iter_mut(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }

    /// Removes every entry while keeping the bucket array size.
    pub fn clear(&mut self) {
        self.list.clear();
        for chain in &mut self.chains {
            *chain = Chain::default();
        }
    }

    /// Validates every map invariant, panicking on the first violation:
    /// list link consistency, each chain's run staying inside its bucket,
    /// run starts being true run starts, and the runs covering the list
    /// exactly. Intended for tests and debugging.
    #[doc(hidden)]
    pub fn check_invariants(&self) {
        self.list.check_links();
        let mut covered = 0usize;
        for (index, chain) in self.chains.iter().enumerate() {
            if chain.len == 0 {
                assert!(
                    chain.first.is_end(),
                    "empty chain {index} must point at the end position"
                );
                continue;
            }
            let before = self.list.prev(chain.first);
            if !before.is_end() {
                let neighbor = match self.list.get(before) {
                    Some(e) => e,
                    None => broken_chain(),
                };
                assert_ne!(
                    self.bucket_of(neighbor.hash),
                    index,
                    "chain {index} does not start at the first entry of its run"
                );
            }
            let mut at = chain.first;
            for _ in 0..chain.len {
                let entry = match self.list.get(at) {
                    Some(e) => e,
                    None => broken_chain(),
                };
                assert_eq!(
                    self.bucket_of(entry.hash),
                    index,
                    "chain {index} covers an entry of another bucket"
                );
                at = self.list.next(at);
            }
            covered += chain.len;
        }
        assert_eq!(
            covered,
            self.list.len(),
            "chain runs must cover the list exactly"
        );
    }
}

impl<K, V, S, P> ChainedHashMap<K, V, S, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    P: NodePool<Node<Entry<K, V>>>,
{
    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(key)
    }

    fn find_hashed<Q>(&self, hash: u64, key: &Q) -> Option<Pos>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let chain = &self.chains[self.bucket_of(hash)];
        let mut at = chain.first;
        for _ in 0..chain.len {
            let entry = match self.list.get(at) {
                Some(e) => e,
                None => broken_chain(),
            };
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(at);
            }
            at = self.list.next(at);
        }
        None
    }

    /// Position of `key`'s entry, or `None` when absent. Scans only the
    /// key's bucket run, so the cost is the run length.
    pub fn find<Q>(&self, key: &Q) -> Option<Pos>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_hashed(self.hash_of(key), key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find(key)?;
        self.list.get(pos).map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find(key)?;
        self.list.get_mut(pos).map(|e| &mut e.value)
    }

    /// Checked lookup: the value for `key`, or
    /// [`LookupError::KeyNotFound`].
    pub fn at<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).ok_or(LookupError::KeyNotFound)
    }

    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_mut(key).ok_or(LookupError::KeyNotFound)
    }

    /// Grows the bucket array by doubling until `new_size` entries fit
    /// under the load factor bound.
    fn grow_for(&mut self, new_size: usize) {
        let mut buckets = self.chains.len();
        while new_size as f32 > self.max_load_factor * buckets as f32 {
            buckets *= 2;
        }
        if buckets != self.chains.len() {
            self.rehash(buckets);
        }
    }

    /// Links a new entry at the front of its bucket's run and points the
    /// descriptor at it. Prepending keeps the run contiguous without
    /// knowing where it ends.
    fn place(&mut self, entry: Entry<K, V>) -> Pos {
        let bucket = self.bucket_of(entry.hash);
        let first = self.chains[bucket].first;
        let pos = self.list.insert(first, entry);
        let chain = &mut self.chains[bucket];
        chain.first = pos;
        chain.len += 1;
        pos
    }

    /// Inserts `key`/`value` and returns the entry's position plus whether
    /// a new entry was created. A present key keeps its current value and
    /// reports `false`.
    ///
    /// When the new entry would push the load factor past its bound, the
    /// map grow-rehashes before the entry is placed, so the bound holds
    /// again as soon as `insert` returns.
    pub fn insert(&mut self, key: K, value: V) -> (Pos, bool) {
        let hash = self.hash_of(&key);
        if let Some(existing) = self.find_hashed(hash, &key) {
            return (existing, false);
        }
        let new_size = self.list.len() + 1;
        self.grow_for(new_size);
        let pos = self.place(Entry { key, value, hash });
        (pos, true)
    }

    /// Value for `key`, inserting `default()` first when absent. The
    /// closure runs only when an entry is actually created.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let hash = self.hash_of(&key);
        let pos = match self.find_hashed(hash, &key) {
            Some(existing) => existing,
            None => {
                let new_size = self.list.len() + 1;
                self.grow_for(new_size);
                self.place(Entry {
                    key,
                    value: default(),
                    hash,
                })
            }
        };
        match self.list.get_mut(pos) {
            Some(entry) => &mut entry.value,
            None => broken_chain(),
        }
    }

    /// Index-operator-style access: the value for `key`, creating a
    /// default-valued entry on first access.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Erases the entry at `pos`, returning it together with the position
    /// of the next surviving entry so scans can keep going. A stale
    /// position (including one already erased) returns `None` and leaves
    /// the map untouched.
    pub fn erase(&mut self, pos: Pos) -> Option<Removed<K, V>> {
        let hash = self.list.get(pos)?.hash;
        let next = self.list.next(pos);
        let bucket = self.bucket_of(hash);
        let chain = &mut self.chains[bucket];
        if chain.len == 0 {
            broken_chain();
        }
        chain.len -= 1;
        if chain.len == 0 {
            chain.first = Pos::end();
        } else if chain.first == pos {
            // The run start is going away while the run survives; its
            // successor becomes the new first, keeping the descriptor live.
            chain.first = next;
        }
        match self.list.remove(pos) {
            Some(entry) => Some(Removed {
                key: entry.key,
                value: entry.value,
                next,
            }),
            None => broken_chain(),
        }
    }

    /// Removes `key`'s entry, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find(key)?;
        self.erase(pos).map(|removed| removed.value)
    }

    /// Removes `key`'s entry, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find(key)?;
        self.erase(pos).map(|removed| (removed.key, removed.value))
    }

    /// Keeps only the entries for which `f` returns `true`, erasing the
    /// rest in one pass.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut pos = self.list.front();
        while !pos.is_end() {
            let keep = match self.list.get_mut(pos) {
                Some(entry) => f(&entry.key, &mut entry.value),
                None => broken_chain(),
            };
            if keep {
                pos = self.list.next(pos);
            } else {
                pos = match self.erase(pos) {
                    Some(removed) => removed.next,
                    None => broken_chain(),
                };
            }
        }
    }

    /// Rebuilds the bucket array at `buckets` slots (at least one) and
    /// redistributes every entry in a single pass over the list: each node
    /// is extracted and respliced at the front of its recomputed bucket's
    /// run. Only links are rewritten; no entry is copied or reallocated,
    /// and no position handed out earlier goes stale.
    pub fn rehash(&mut self, buckets: usize) {
        let buckets = buckets.max(1);
        // Allocate the replacement descriptors before touching any node, so
        // an allocation failure leaves the map fully intact.
        self.chains = vec![Chain::default(); buckets];

        // Walk the list in its pre-rehash order. Processed nodes are
        // respliced at the tail or before another processed node, so the
        // successor captured before each extraction is always the next
        // unprocessed node.
        let count = self.list.len();
        let mut cursor = self.list.front();
        for _ in 0..count {
            let pos = cursor;
            cursor = self.list.next(pos);
            let node = match self.list.extract(pos) {
                Some(node) => node,
                None => broken_chain(),
            };
            let hash = match self.list.get(Pos::from(node)) {
                Some(entry) => entry.hash,
                None => broken_chain(),
            };
            let bucket = self.bucket_of(hash);
            let first = self.chains[bucket].first;
            let new_pos = self.list.insert_before(first, node);
            let chain = &mut self.chains[bucket];
            chain.first = new_pos;
            chain.len += 1;
        }
    }

    /// Ensures `count` total entries fit without another rehash, growing
    /// the bucket array by doubling when needed.
    pub fn reserve(&mut self, count: usize) {
        self.grow_for(count.max(self.list.len()));
    }

    /// Replaces the load factor bound and rehashes immediately when the
    /// current contents already violate it.
    ///
    /// # Panics
    ///
    /// Panics unless `max_load_factor` is positive and finite.
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) {
        assert!(
            max_load_factor > 0.0 && max_load_factor.is_finite(),
            "max load factor must be positive and finite"
        );
        self.max_load_factor = max_load_factor;
        let size = self.list.len();
        self.grow_for(size);
    }

    /// Bucket index `key` currently maps to.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.bucket_of(self.hash_of(key))
    }
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, P> Clone for ChainedHashMap<K, V, S, P>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone,
    P: NodePool<Node<Entry<K, V>>> + Default,
{
    fn clone(&self) -> Self {
        let mut clone =
            Self::with_buckets_hasher_and_pool(self.bucket_count(), self.hasher.clone(), P::default());
        clone.max_load_factor = self.max_load_factor;
        for (key, value) in self.iter() {
            clone.insert(key.clone(), value.clone());
        }
        clone
    }
}

impl<K, V, S, P> fmt::Debug for ChainedHashMap<K, V, S, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: NodePool<Node<Entry<K, V>>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, P> PartialEq for ChainedHashMap<K, V, S, P>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    P: NodePool<Node<Entry<K, V>>>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| *value == *v))
    }
}

impl<K, V, S, P> Eq for ChainedHashMap<K, V, S, P>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
    P: NodePool<Node<Entry<K, V>>>,
{
}

impl<K, V, S, P> Extend<(K, V)> for ChainedHashMap<K, V, S, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    P: NodePool<Node<Entry<K, V>>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S, P> FromIterator<(K, V)> for ChainedHashMap<K, V, S, P>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    P: NodePool<Node<Entry<K, V>>> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map =
            Self::with_buckets_hasher_and_pool(DEFAULT_BUCKETS, S::default(), P::default());
        map.extend(iter);
        map
    }
}

/// Immutable map iterator in list order.
pub struct Iter<'a, K, V, P = SlotPool<Node<Entry<K, V>>>> {
    inner: chain_list::Iter<'a, Entry<K, V>, P>,
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> Iterator for Iter<'a, K, V, P> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> DoubleEndedIterator for Iter<'a, K, V, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next_back()?;
        Some((&entry.key, &entry.value))
    }
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> ExactSizeIterator for Iter<'a, K, V, P> {}
impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> core::iter::FusedIterator for Iter<'a, K, V, P> {}

/// Mutable map iterator in list order. Keys stay shared; values are
/// mutable.
pub struct IterMut<'a, K, V, P = SlotPool<Node<Entry<K, V>>>> {
    inner: chain_list::IterMut<'a, Entry<K, V>, P>,
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> Iterator for IterMut<'a, K, V, P> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some((&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> DoubleEndedIterator for IterMut<'a, K, V, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next_back()?;
        Some((&entry.key, &mut entry.value))
    }
}

impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> ExactSizeIterator for IterMut<'a, K, V, P> {}
impl<'a, K, V, P: NodePool<Node<Entry<K, V>>>> core::iter::FusedIterator for IterMut<'a, K, V, P> {}

/// Owning map iterator in list order.
pub struct IntoIter<K, V, P = SlotPool<Node<Entry<K, V>>>> {
    list: ChainList<Entry<K, V>, P>,
}

impl<K, V, P: NodePool<Node<Entry<K, V>>>> Iterator for IntoIter<K, V, P> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.list.pop_front().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<K, V, P: NodePool<Node<Entry<K, V>>>> DoubleEndedIterator for IntoIter<K, V, P> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.list.pop_back().map(|entry| (entry.key, entry.value))
    }
}

impl<K, V, P: NodePool<Node<Entry<K, V>>>> ExactSizeIterator for IntoIter<K, V, P> {}

impl<K, V, S, P: NodePool<Node<Entry<K, V>>>> IntoIterator for ChainedHashMap<K, V, S, P> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self.list }
    }
}

impl<'a, K, V, S, P: NodePool<Node<Entry<K, V>>>> IntoIterator for &'a ChainedHashMap<K, V, S, P> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S, P: NodePool<Node<Entry<K, V>>>> IntoIterator
    for &'a mut ChainedHashMap<K, V, S, P>
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
