// End-to-end scenarios for ChainedHashMap, exercising the public surface
// the way a caller would: growth under load, erase-while-scanning, and the
// documented ordering behavior.

use chain_map::{ChainedHashMap, LookupError, Pos};
use std::hash::{BuildHasher, Hasher};

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

/// Invariant: starting at 4 buckets with the 0.75 bound, the bucket array
/// doubles to 8 while the 4th key is inserted and to 16 while the 7th is;
/// every key stays findable throughout and absent keys stay absent.
#[test]
fn growth_schedule_doubles_at_the_documented_points() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::with_buckets(4);
    assert_eq!(m.bucket_count(), 4);
    assert!((m.max_load_factor() - 0.75).abs() < f32::EPSILON);

    for key in 1..=10u32 {
        let (_, inserted) = m.insert(key, key * 100);
        assert!(inserted);

        let expected_buckets = match key {
            1..=3 => 4,
            4..=6 => 8,
            _ => 16,
        };
        assert_eq!(
            m.bucket_count(),
            expected_buckets,
            "after inserting key {key}"
        );
        assert!(m.len() as f32 <= m.max_load_factor() * m.bucket_count() as f32);

        for probe in 1..=key {
            assert_eq!(m.get(&probe), Some(&(probe * 100)), "key {probe} lost");
        }
        m.check_invariants();
    }
    assert!(m.find(&11).is_none());
}

/// Invariant: inserting under a present key returns the existing position
/// with `inserted == false`; value and size are untouched.
#[test]
fn duplicate_insert_reports_existing_entry() {
    let mut m: ChainedHashMap<&str, i32> = ChainedHashMap::new();
    let (first, inserted) = m.insert("a", 1);
    assert!(inserted);
    let (second, inserted) = m.insert("a", 2);
    assert!(!inserted);
    assert_eq!(first, second);
    assert_eq!(m.get(&"a"), Some(&1));
    assert_eq!(m.len(), 1);
}

/// Invariant: erase hands back the successor position, so a full scan can
/// erase as it goes and terminate at the end position.
#[test]
fn erase_driven_scan_drains_the_map() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::new();
    for i in 0..50 {
        m.insert(i, i);
    }
    let mut pos = m.find(&m.iter().next().map(|(k, _)| *k).unwrap()).unwrap();
    let mut drained = 0;
    while let Some(removed) = m.erase(pos) {
        drained += 1;
        if removed.next.is_end() {
            break;
        }
        pos = removed.next;
        m.check_invariants();
    }
    assert_eq!(drained, 50);
    assert!(m.is_empty());
}

/// Invariant: a position returned from erase stays usable even when the
/// erased and surviving entries share one bucket run (constant hasher),
/// and erasing through a stale position is a no-op rather than a
/// double-free.
#[test]
fn erase_in_single_run_map_is_safe_and_exact() {
    let mut m: ChainedHashMap<String, u32, ConstBuildHasher> =
        ChainedHashMap::with_hasher(ConstBuildHasher);
    for i in 0..10u32 {
        m.insert(format!("k{i}"), i);
    }
    let pos = m.find("k9").unwrap();
    let removed = m.erase(pos).unwrap();
    assert_eq!(removed.value, 9);
    assert!(m.erase(pos).is_none(), "stale position must not erase twice");
    assert_eq!(m.len(), 9);
    for i in 0..9u32 {
        assert_eq!(m.get(format!("k{i}").as_str()), Some(&i));
    }
    m.check_invariants();
}

/// Invariant: checked access distinguishes absence as an error while the
/// get-or-insert accessor materializes a default entry instead.
#[test]
fn checked_and_defaulting_access_disagree_on_absence() {
    let mut m: ChainedHashMap<String, Vec<u32>> = ChainedHashMap::new();
    assert_eq!(m.at("missing"), Err(LookupError::KeyNotFound));
    m.get_or_insert_default("missing".to_string()).push(1);
    assert_eq!(m.at("missing"), Ok(&vec![1]));
    m.get_or_insert_default("missing".to_string()).push(2);
    assert_eq!(m.at("missing"), Ok(&vec![1, 2]));
    assert_eq!(m.len(), 1);
}

/// Invariant: iteration visits each bucket's entries consecutively; an
/// explicit rehash regroups but never loses or duplicates entries.
#[test]
fn iteration_groups_survive_rehash() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::with_buckets(8);
    for i in 0..64 {
        m.insert(i, i);
    }
    for buckets in [5, 16, 1, 32] {
        m.rehash(buckets);
        m.check_invariants();
        assert_eq!(m.len(), 64);

        let groups: Vec<usize> = m.iter().map(|(k, _)| m.bucket_index(k)).collect();
        let mut seen = std::collections::HashSet::new();
        let mut current = None;
        for b in groups {
            if current != Some(b) {
                assert!(seen.insert(b), "bucket {b} split into separate groups");
                current = Some(b);
            }
        }
        let collected: std::collections::BTreeMap<u32, u32> =
            m.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(collected.len(), 64);
        for i in 0..64 {
            assert_eq!(collected.get(&i), Some(&i));
        }
    }
}

/// Invariant: positions survive rehash; only erase invalidates them.
#[test]
fn positions_survive_rehash_and_growth() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::new();
    let mut positions: Vec<(u32, Pos)> = Vec::new();
    for i in 0..100 {
        let (pos, _) = m.insert(i, i);
        positions.push((i, pos));
    }
    m.rehash(3);
    m.rehash(256);
    for (key, pos) in &positions {
        assert_eq!(m.get_at(*pos), Some((key, key)));
        assert_eq!(m.find(key), Some(*pos));
    }
    m.check_invariants();
}

/// Invariant: retain erases in one pass and may observe and mutate each
/// value exactly once.
#[test]
fn retain_visits_each_entry_once() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::new();
    for i in 0..30 {
        m.insert(i, 0);
    }
    m.retain(|_, v| {
        *v += 1;
        true
    });
    assert!(m.values().all(|v| *v == 1));
    m.retain(|k, _| k % 3 == 0);
    assert_eq!(m.len(), 10);
    m.check_invariants();
}
