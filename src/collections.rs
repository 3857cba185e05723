//! Value conversion, grouping, and reshaping for the standard hash
//! containers.
//!
//! This module corresponds to [`std::collections`].

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Converts every value of a map with `f`, leaving the key set untouched.
///
/// The output is pre-sized to the input's key count, and `f` runs exactly
/// once per value. Iteration order of the result, as with any hash map, is
/// unspecified.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let prices = HashMap::from([("apple", 3), ("pear", 5)]);
///
/// let doubled = reshape::convert_values(prices, |cents| cents * 2);
/// assert_eq!(doubled, HashMap::from([("apple", 6), ("pear", 10)]));
/// ```
#[inline]
pub fn convert_values<K, I, O, F>(input: HashMap<K, I>, mut f: F) -> HashMap<K, O>
where
    K: Eq + Hash,
    F: FnMut(I) -> O,
{
    input
        .into_iter()
        .map(|(key, value)| (key, f(value)))
        .collect()
}

/// Lifts a value converter into a whole-map converter.
///
/// The map-shaped counterpart of [`converter`](crate::vec::converter): wrap
/// once per level of `HashMap<_, HashMap<_, _>>` nesting. The closure's
/// parameter type usually needs an explicit annotation here.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let nested = HashMap::from([("outer", HashMap::from([("inner", 1)]))]);
///
/// let bumped = reshape::convert_values(nested, reshape::value_converter(|n: i32| n + 1));
/// assert_eq!(bumped, HashMap::from([("outer", HashMap::from([("inner", 2)]))]));
/// ```
#[inline]
pub fn value_converter<K, I, O, F>(mut f: F) -> impl FnMut(HashMap<K, I>) -> HashMap<K, O>
where
    K: Eq + Hash,
    F: FnMut(I) -> O,
{
    move |input| convert_values(input, &mut f)
}

/// Partitions a sequence into groups keyed by `key`.
///
/// Elements deriving the same key end up in the same group, keeping their
/// input order relative to each other. A key no element derives is absent
/// from the result, so every group is non-empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let groups = reshape::group_by([1, 2, 3, 4], |n| n % 2);
/// assert_eq!(groups, HashMap::from([(0, vec![2, 4]), (1, vec![1, 3])]));
/// ```
#[inline]
pub fn group_by<T, K, F>(input: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let iter = input.into_iter();
    let mut groups: HashMap<K, Vec<T>> = HashMap::with_capacity(iter.size_hint().0);

    for item in iter {
        groups.entry(key(&item)).or_default().push(item);
    }

    groups
}

/// Indexes a sequence by a derived key, keeping one element per key.
///
/// **Collisions are silent**: when two elements derive the same key, the
/// later one (in input order) overwrites the earlier — last-write-wins, no
/// error, no warning. That makes this a data-loss footgun for keys that are
/// not unique; reach for [`group_by`] when every element must survive.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let indexed = reshape::index_by([("a", 1), ("a", 2)], |entry| entry.0);
///
/// // The second entry won.
/// assert_eq!(indexed, HashMap::from([("a", ("a", 2))]));
/// ```
#[inline]
pub fn index_by<T, K, F>(input: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    input.into_iter().map(|item| (key(&item), item)).collect()
}

/// Collects the set of keys a sequence's elements derive.
///
/// Duplicate keys collapse to a single membership entry. The key extractor
/// takes elements by value (they are consumed anyway), so
/// [`identity`](crate::convert::identity) works as the extractor when
/// elements are their own keys.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// let seen = reshape::key_set(["a", "b", "a"], reshape::identity);
/// assert_eq!(seen, HashSet::from(["a", "b"]));
/// ```
#[inline]
pub fn key_set<T, K, F>(input: impl IntoIterator<Item = T>, key: F) -> HashSet<K>
where
    K: Eq + Hash,
    F: FnMut(T) -> K,
{
    input.into_iter().map(key).collect()
}

/// Flattens a map into a `Vec` of its values.
///
/// The output length equals the map's key count. **Order is unspecified**
/// and may differ from one call to the next; sort the result at the call
/// site when determinism matters.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let map = HashMap::from([(1, "one"), (2, "two")]);
///
/// let mut vals = reshape::values(map);
/// vals.sort();
/// assert_eq!(vals, ["one", "two"]);
/// ```
#[inline]
pub fn values<K, T>(input: HashMap<K, T>) -> Vec<T> {
    input.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::identity;

    #[test]
    fn groups_by_parity() {
        let groups = group_by([1, 2, 3, 4], |n| n % 2);
        assert_eq!(groups, HashMap::from([(0, vec![2, 4]), (1, vec![1, 3])]));
    }

    #[test]
    fn later_entry_wins_on_collision() {
        let indexed = index_by([("a", 1), ("a", 2)], |entry| entry.0);
        assert_eq!(indexed, HashMap::from([("a", ("a", 2))]));
    }

    #[test]
    fn distinct_keys_only() {
        let keys = key_set([1, 1, 2, 2, 2, 3], identity);
        assert_eq!(keys, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn nested_map_conversion() {
        let nested = HashMap::from([("outer", HashMap::from([("inner", 1)]))]);
        let bumped = convert_values(nested, value_converter(|n: i32| n + 1));
        assert_eq!(
            bumped,
            HashMap::from([("outer", HashMap::from([("inner", 2)]))])
        );
    }

    #[test]
    fn empty_inputs_yield_empty_outputs() {
        assert!(group_by(Vec::<i32>::new(), |&n| n).is_empty());
        assert!(index_by(Vec::<i32>::new(), |&n| n).is_empty());
        assert!(key_set(Vec::<i32>::new(), identity).is_empty());
        assert!(values(HashMap::<i32, i32>::new()).is_empty());
    }
}
