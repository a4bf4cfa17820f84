//! Ordering and set-like helpers over slices.
//!
//! Every function here borrows its input and returns a freshly allocated
//! `Vec`. Nothing is mutated in place and nothing fails: empty input simply
//! produces empty output.
//!
//! # Overview
//!
//! - **Natural ordering**: [`sort_natural`] orders `"item2"` before `"item10"`
//! - **Set operations**: [`unique`], [`merge`] and [`minus`] keep first-seen order
//! - **Transformations**: [`map`] and [`select`] apply closures to a copy
//! - **Default detection**: the [`IsDefault`] trait replaces runtime zero checks
//!
//! # Example
//!
//! ```rust
//! use toolshed_slice::{merge, minus, sort_natural, tokens};
//!
//! let versions = sort_natural(&["v1.10.3", "v1.5.1", "v1.10.1"], false);
//! assert_eq!(versions, vec!["v1.5.1", "v1.10.1", "v1.10.3"]);
//!
//! let all = merge(&[&[1, 2][..], &[2, 3, 4][..]]);
//! assert_eq!(all, vec![1, 2, 3, 4]);
//! assert_eq!(minus(&all, &[1, 3]), vec![2, 4]);
//!
//! assert_eq!(tokens(&["a, b", "B c"]), vec!["a", "b", "c"]);
//! ```

mod default;
mod natural;
mod sets;
mod transform;

pub use default::{first_non_empty, is_default, is_not_default, IsDefault};
pub use natural::{natural_cmp, sort_natural};
pub use sets::{
    includes, merge, minus, to_map, to_map_with_value, tokens, unique, unique_opt,
};
pub use transform::{map, map_opt, select, select_opt, sort, MapFn, SelectFn};
