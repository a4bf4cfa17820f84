//! Copy-and-transform helpers.

use crate::default::IsDefault;

/// A mapping step applied by [`map`].
pub type MapFn<'a, T> = &'a dyn Fn(T) -> T;

/// A predicate used by [`select`].
pub type SelectFn<'a, T> = &'a dyn Fn(&T) -> bool;

/// Returns a copy of `values` where each element has been passed through
/// every function in `funcs`, in order.
///
/// ```rust
/// use toolshed_slice::{map, MapFn};
///
/// let trim: MapFn<'_, String> = &|s| s.trim().to_string();
/// let lower: MapFn<'_, String> = &|s| s.to_lowercase();
/// let names = ["  Alice ".to_string(), "BOB".to_string()];
/// assert_eq!(map(&names, &[trim, lower]), vec!["alice", "bob"]);
/// ```
pub fn map<T: Clone>(values: &[T], funcs: &[MapFn<'_, T>]) -> Vec<T> {
    values
        .iter()
        .map(|v| funcs.iter().fold(v.clone(), |acc, f| f(acc)))
        .collect()
}

/// Like [`map`], but keeps an absent input absent.
pub fn map_opt<T: Clone>(values: Option<&[T]>, funcs: &[MapFn<'_, T>]) -> Option<Vec<T>> {
    values.map(|v| map(v, funcs))
}

/// Returns the values for which any predicate in `predicates` returns true.
///
/// With no predicates, every value that is not its type's default is kept.
pub fn select<T>(values: &[T], predicates: &[SelectFn<'_, T>]) -> Vec<T>
where
    T: Clone + IsDefault,
{
    values
        .iter()
        .filter(|v| {
            if predicates.is_empty() {
                !v.is_default()
            } else {
                predicates.iter().any(|p| p(v))
            }
        })
        .cloned()
        .collect()
}

/// Like [`select`], but keeps an absent input absent.
pub fn select_opt<T>(values: Option<&[T]>, predicates: &[SelectFn<'_, T>]) -> Option<Vec<T>>
where
    T: Clone + IsDefault,
{
    values.map(|v| select(v, predicates))
}

/// Returns a sorted copy of `values`.
///
/// ```rust
/// use toolshed_slice::sort;
///
/// assert_eq!(sort(&[3, 2, 4, 1]), vec![1, 2, 3, 4]);
/// ```
pub fn sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
