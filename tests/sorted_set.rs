use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Bound;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sorted_vec_collections::SortedSet;

/// Operations per proptest case.
const TEST_SIZE: usize = 2_000;

/// Narrow enough that inserts collide with stored values.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Position a value would take in `model`, counting the values ordered before it.
fn rank(model: &BTreeSet<i64>, value: i64) -> usize {
    model.range(..value).count()
}

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    InsertWithHint(usize, i64),
    Remove(i64),
    EraseKey(i64),
    Erase(usize),
    Lookup(i64),
    Ends,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => (0usize..TEST_SIZE, value_strategy()).prop_map(|(hint, v)| SetOp::InsertWithHint(hint, v)),
        2 => value_strategy().prop_map(SetOp::Remove),
        1 => value_strategy().prop_map(SetOp::EraseKey),
        1 => (0usize..TEST_SIZE).prop_map(SetOp::Erase),
        2 => value_strategy().prop_map(SetOp::Lookup),
        1 => Just(SetOp::Ends),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Every operation reports the position a `BTreeSet` model predicts.
    #[test]
    fn positions_agree_with_btreeset_ranks(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: SortedSet<i64> = SortedSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    let expected = (rank(&model, v), model.insert(v));
                    prop_assert_eq!(set.insert(v), expected, "insert({})", v);
                }
                SetOp::InsertWithHint(hint, v) => {
                    let expected = rank(&model, v);
                    model.insert(v);
                    prop_assert_eq!(set.insert_with_hint(hint, v), expected, "insert_with_hint({}, {})", hint, v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), model.remove(&v), "remove({})", v);
                }
                SetOp::EraseKey(v) => {
                    prop_assert_eq!(set.erase_key(&v), usize::from(model.remove(&v)), "erase_key({})", v);
                }
                SetOp::Erase(position) => {
                    if let Some(&stored) = model.iter().nth(position) {
                        prop_assert_eq!(set.erase(position), position);
                        model.remove(&stored);
                        prop_assert_eq!(set.get_at(position), model.iter().nth(position));
                    }
                }
                SetOp::Lookup(v) => {
                    let found = model.contains(&v).then(|| rank(&model, v));
                    prop_assert_eq!(set.find(&v), found, "find({})", v);
                    prop_assert_eq!(set.contains(&v), model.contains(&v));
                    prop_assert_eq!(set.get(&v), model.get(&v));
                    prop_assert_eq!(set.count(&v), usize::from(model.contains(&v)));
                }
                SetOp::Ends => {
                    prop_assert_eq!(set.first(), model.first());
                    prop_assert_eq!(set.last(), model.last());
                }
            }
            prop_assert_eq!(set.len(), model.len(), "len after {:?}", op);
        }

        prop_assert!(set.iter().eq(model.iter()));
        prop_assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]), "not strictly ascending");
    }

    #[test]
    fn bounds_split_the_slice_around_a_value(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        target in value_strategy(),
    ) {
        let set: SortedSet<i64> = values.iter().copied().collect();
        let lower = set.lower_bound(&target);
        let upper = set.upper_bound(&target);

        prop_assert!(set.as_slice()[..lower].iter().all(|v| *v < target));
        prop_assert!(set.as_slice()[lower..].iter().all(|v| *v >= target));
        prop_assert!(set.as_slice()[upper..].iter().all(|v| *v > target));
        prop_assert_eq!(upper - lower, set.count(&target));
        prop_assert_eq!(set.equal_range(&target), lower..upper);
    }

    #[test]
    fn range_matches_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        a in value_strategy(),
        b in value_strategy(),
    ) {
        let set: SortedSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();
        let (lo, hi) = (a.min(b), a.max(b));

        prop_assert!(set.range(lo..hi).eq(model.range(lo..hi)));
        prop_assert!(set.range(lo..=hi).rev().eq(model.range(lo..=hi).rev()));
        prop_assert!(set.range(..hi).eq(model.range(..hi)));
        prop_assert!(set.range(lo..).eq(model.range(lo..)));
        let open = (Bound::Excluded(lo), Bound::Unbounded);
        prop_assert!(set.range(open).eq(model.range(open)));
        prop_assert_eq!(set.range(lo..=hi).len(), model.range(lo..=hi).count());
    }

    #[test]
    fn ascending_input_with_end_hints_appends(mut values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        values.sort_unstable();
        values.dedup();
        let mut set = SortedSet::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            let end = set.len();
            prop_assert_eq!(set.insert_with_hint(end, *v), i);
        }
        prop_assert_eq!(set.as_slice(), values.as_slice());
    }

    #[test]
    fn erase_range_matches_vec_drain(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        start in 0usize..TEST_SIZE,
        len in 0usize..64,
    ) {
        let mut set: SortedSet<i64> = values.iter().copied().collect();
        let mut expected = set.as_slice().to_vec();
        let start = start.min(set.len());
        let end = (start + len).min(set.len());
        expected.drain(start..end);

        prop_assert_eq!(set.erase_range(start..end), start);
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[test]
    fn retain_keeps_order_and_matches_filter(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut set: SortedSet<i64> = values.iter().copied().collect();
        let expected: Vec<i64> = set.iter().copied().filter(|v| v % 3 != 0).collect();
        set.retain(|v| v % 3 != 0);
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[test]
    fn insert_iter_counts_only_new_values(
        initial in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
        extra in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
    ) {
        let mut set: SortedSet<i64> = initial.iter().copied().collect();
        let mut model: BTreeSet<i64> = initial.iter().copied().collect();
        let before = model.len();
        model.extend(extra.iter());

        prop_assert_eq!(set.insert_iter(extra.iter().copied()), model.len() - before);
        prop_assert!(set.iter().eq(model.iter()));
    }

    #[test]
    fn comparisons_and_hash_follow_contents(
        a in proptest::collection::vec(value_strategy(), 0..64),
        b in proptest::collection::vec(value_strategy(), 0..64),
    ) {
        let (sa, sb): (SortedSet<i64>, SortedSet<i64>) = (a.iter().copied().collect(), b.iter().copied().collect());
        let (ma, mb): (BTreeSet<i64>, BTreeSet<i64>) = (a.iter().copied().collect(), b.iter().copied().collect());

        prop_assert_eq!(sa == sb, ma == mb);
        prop_assert_eq!(sa.cmp(&sb), ma.cmp(&mb));
        prop_assert_eq!(sa.partial_cmp(&sb), ma.partial_cmp(&mb));

        let reversed: SortedSet<i64> = a.iter().rev().copied().collect();
        prop_assert_eq!(hash_of(&sa), hash_of(&reversed));
    }
}

#[test]
#[should_panic(expected = "range start is greater than range end")]
fn inverted_range_panics() {
    let set = SortedSet::from([1, 2, 3]);
    let _ = set.range((Bound::Included(5), Bound::Included(3)));
}

#[test]
#[should_panic(expected = "range start is greater than range end")]
fn empty_excluded_range_panics() {
    let set = SortedSet::from([1, 2, 3]);
    let _ = set.range((Bound::Excluded(2), Bound::Excluded(2)));
}

#[test]
#[should_panic(expected = "erase position (is 3) should be < len (is 3)")]
fn erase_at_end_panics() {
    let mut set = SortedSet::from([1, 2, 3]);
    let end = set.len();
    set.erase(end);
}

#[test]
#[should_panic]
fn erase_range_past_end_panics() {
    let mut set = SortedSet::from([1, 2, 3]);
    set.erase_range(2..5);
}

/// Deterministic pseudo-random values from a fixed LCG seed.
fn lcg_values(n: usize) -> Vec<i64> {
    let mut x: u64 = 0x2545_f491;
    (0..n)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (x >> 40) as i64
        })
        .collect()
}

mod insertion_patterns {
    use super::*;
    use pretty_assertions::assert_eq;

    const N: i64 = 10_000;

    #[test]
    fn descending_inserts_always_land_at_the_front() {
        let mut set = SortedSet::new();
        for v in (0..N).rev() {
            assert_eq!(set.insert(v), (0, true));
        }
        assert!(set.iter().copied().eq(0..N));
    }

    #[test]
    fn stale_hints_still_sort() {
        let mut set = SortedSet::new();
        for v in lcg_values(N as usize) {
            let hint = set.len() / 2;
            let position = set.insert_with_hint(hint, v);
            assert_eq!(set.get_at(position), Some(&v));
        }
        assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn remove_every_other_value() {
        let values = lcg_values(N as usize);
        let mut set: SortedSet<i64> = values.iter().copied().collect();
        let mut model: BTreeSet<i64> = values.iter().copied().collect();
        for v in values.iter().step_by(2) {
            assert_eq!(set.remove(v), model.remove(v));
        }
        assert!(set.iter().eq(model.iter()));
    }
}

#[test]
fn capacity_and_conversions() {
    let mut set: SortedSet<u32> = SortedSet::with_capacity(8);
    assert!(set.capacity() >= 8);
    set.reserve(100);
    assert!(set.capacity() >= 100);
    set.extend(&[3, 1, 2, 3]);
    set.shrink_to_fit();
    assert!(set.capacity() >= 3);

    assert!(SortedSet::<u32>::default().is_empty());
    assert_eq!(set, SortedSet::from([2, 3, 1]));
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");

    let by_ref: Vec<u32> = (&set).into_iter().copied().collect();
    assert_eq!(by_ref, [1, 2, 3]);

    let mut owned = set.clone().into_iter();
    assert_eq!(owned.next_back(), Some(3));
    assert_eq!(owned.len(), 2);
    assert_eq!(owned.collect::<Vec<_>>(), [1, 2]);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
}

#[test]
fn emplace_converts_before_inserting() {
    let mut set: SortedSet<String> = SortedSet::new();
    assert_eq!(set.emplace("b"), (0, true));
    assert_eq!(set.emplace_hint(0, "a"), 0);
    assert_eq!(set.emplace_hint(2, "c"), 2);
    assert_eq!(set.emplace("b"), (1, false));
    assert_eq!(set.as_slice(), ["a", "b", "c"]);
    assert_eq!(set.find("c"), Some(2));
    assert_eq!(set.get("b").map(String::as_str), Some("b"));
}
