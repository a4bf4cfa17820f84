//! Natural ("version aware") string ordering.
//!
//! Strings are split into alternating runs of ASCII digits and non-digits.
//! Runs are compared pairwise from the left: two digit runs compare by numeric
//! value, anything else compares as plain text.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn as_str(&self) -> &'a str {
        match self {
            Chunk::Number(s) | Chunk::Text(s) => s,
        }
    }
}

/// Iterator over the natural-order chunks of a string.
///
/// Concatenating every yielded chunk gives back the input.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if numeric {
            Chunk::Number(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

fn cmp_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Number(x), Chunk::Number(y)) => {
            let x = strip_leading_zeros(x);
            let y = strip_leading_zeros(y);
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        _ => a.as_str().cmp(b.as_str()),
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Compares two strings in natural order.
///
/// An exhausted string orders before one that still has chunks left, and
/// digit runs that differ only in leading zeros compare equal.
///
/// ```rust
/// use std::cmp::Ordering;
/// use toolshed_slice::natural_cmp;
///
/// assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(natural_cmp("v1.10", "v1.9"), Ordering::Greater);
/// assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_chunks(x, y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}

/// Returns a copy of `values` sorted in natural order.
///
/// With `ignore_case` the comparison runs on lowercased keys; the returned
/// values keep their original casing.
pub fn sort_natural<S>(values: &[S], ignore_case: bool) -> Vec<S>
where
    S: AsRef<str> + Clone,
{
    if !ignore_case {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
        return sorted;
    }

    let mut keyed: Vec<(String, &S)> = values
        .iter()
        .map(|v| (v.as_ref().to_lowercase(), v))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    keyed.into_iter().map(|(_, v)| v.clone()).collect()
}
