//! Set-like operations that keep first-seen order.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::default::IsDefault;

/// Returns a copy of `values` with duplicates removed, keeping the first
/// occurrence of each value.
pub fn unique<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Like [`unique`], but keeps an absent input absent.
///
/// `None` maps to `None` while `Some(&[])` maps to `Some(vec![])`, so callers
/// can keep telling "not provided" apart from "provided but empty".
pub fn unique_opt<T>(values: Option<&[T]>) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    values.map(unique)
}

/// Returns true if `values` contains `value`.
pub fn includes<T: PartialEq>(values: &[T], value: &T) -> bool {
    values.iter().any(|v| v == value)
}

/// Returns the elements of `a` that do not appear in `b`, in `a`'s order.
///
/// ```rust
/// use toolshed_slice::minus;
///
/// assert_eq!(minus(&[1, 2, 3, 4], &[1, 3]), vec![2, 4]);
/// ```
pub fn minus<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let exclude: HashSet<&T> = b.iter().collect();
    a.iter().filter(|v| !exclude.contains(v)).cloned().collect()
}

/// Returns the union of all `slices` with duplicates removed, in the order
/// values are first seen across the slices.
///
/// ```rust
/// use toolshed_slice::merge;
///
/// assert_eq!(merge(&[&[1, 2][..], &[2, 3, 4][..]]), vec![1, 2, 3, 4]);
/// ```
pub fn merge<T>(slices: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for value in slices.iter().flat_map(|s| s.iter()) {
        if seen.insert(value) {
            merged.push(value.clone());
        }
    }
    merged
}

/// Splits every value at whitespace or commas and returns the lowercased,
/// de-duplicated tokens in first-seen order.
///
/// ```rust
/// use toolshed_slice::tokens;
///
/// assert_eq!(tokens(&["read, Write", "write exec"]), vec!["read", "write", "exec"]);
/// ```
pub fn tokens<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    let pieces = values.iter().flat_map(|v| {
        v.as_ref()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|piece| !piece.is_empty())
    });
    for piece in pieces {
        let token = piece.to_lowercase();
        if seen.insert(token.clone()) {
            result.push(token);
        }
    }
    result
}

/// Builds a map from the `(key, value)` pairs produced by `generate` for
/// each key. Entries whose generated key is default are skipped.
pub fn to_map<K, V, F>(keys: &[K], mut generate: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + IsDefault,
    F: FnMut(K) -> (K, V),
{
    keys.iter()
        .map(|k| generate(k.clone()))
        .filter(|(k, _)| !k.is_default())
        .collect()
}

/// Builds a map with every non-default key set to `value`.
pub fn to_map_with_value<K, V>(keys: &[K], value: V) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + IsDefault,
    V: Clone,
{
    to_map(keys, |k| (k, value.clone()))
}
