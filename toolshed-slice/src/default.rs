//! Explicit "empty value" detection.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Types that can tell whether they hold their empty/zero value.
///
/// Composite types are default when all of their parts are; optional values
/// are default when absent or when the contained value is default.
///
/// # Example
///
/// ```rust
/// use toolshed_slice::IsDefault;
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl IsDefault for Endpoint {
///     fn is_default(&self) -> bool {
///         self.host.is_default() && self.port.is_default()
///     }
/// }
///
/// assert!(Endpoint { host: String::new(), port: 0 }.is_default());
/// assert!(!Endpoint { host: "localhost".into(), port: 0 }.is_default());
/// ```
pub trait IsDefault {
    /// Returns true if this value is the empty value for its type.
    fn is_default(&self) -> bool;
}

macro_rules! impl_is_default_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsDefault for $ty {
                fn is_default(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

impl_is_default_by_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

impl IsDefault for String {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl IsDefault for str {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsDefault + ?Sized> IsDefault for &T {
    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: IsDefault + ?Sized> IsDefault for Box<T> {
    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: IsDefault> IsDefault for Option<T> {
    fn is_default(&self) -> bool {
        self.as_ref().is_none_or(IsDefault::is_default)
    }
}

impl<T: IsDefault, const N: usize> IsDefault for [T; N] {
    fn is_default(&self) -> bool {
        self.iter().all(IsDefault::is_default)
    }
}

impl<T> IsDefault for Vec<T> {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsDefault for HashMap<K, V, S> {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsDefault for HashSet<T, S> {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsDefault for BTreeMap<K, V> {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsDefault for BTreeSet<T> {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_is_default_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: IsDefault),+> IsDefault for ($($name,)+) {
            #[allow(non_snake_case)]
            fn is_default(&self) -> bool {
                let ($($name,)+) = self;
                true $(&& $name.is_default())+
            }
        }
    };
}

impl_is_default_for_tuple!(A);
impl_is_default_for_tuple!(A, B);
impl_is_default_for_tuple!(A, B, C);
impl_is_default_for_tuple!(A, B, C, D);
impl_is_default_for_tuple!(A, B, C, D, E);
impl_is_default_for_tuple!(A, B, C, D, E, F);

/// Returns true if `value` is the empty value for its type.
pub fn is_default<T: IsDefault + ?Sized>(value: &T) -> bool {
    value.is_default()
}

/// Returns true if `value` differs from the empty value for its type.
pub fn is_not_default<T: IsDefault + ?Sized>(value: &T) -> bool {
    !value.is_default()
}

/// Returns the first value that is not default, or `T::default()` when every
/// value is.
///
/// Put a fallback last to use it when everything before it is empty.
pub fn first_non_empty<T, I>(values: I) -> T
where
    T: IsDefault + Default,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .find(is_not_default)
        .unwrap_or_default()
}
