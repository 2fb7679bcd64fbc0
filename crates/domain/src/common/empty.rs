//! Emptiness checks used by value-object validation.
//!
//! A value is "empty" when it carries no usable content:
//! - `""` (whitespace is *not* empty)
//! - `None`
//! - a collection with no elements, or whose every element is itself empty
//! - a map with no entries
//!
//! Numbers and booleans are never empty.

use std::collections::{BTreeMap, HashMap};

/// Types that can report whether they carry usable content.
pub trait IsEmpty {
    /// Returns `true` when the value counts as not provided.
    fn is_empty_value(&self) -> bool;
}

/// Checks if value is empty.
///
/// # Examples
///
/// ```
/// use tabletop_domain::common::is_empty;
///
/// assert!(is_empty(""));
/// assert!(!is_empty(" "));
/// assert!(is_empty(&Vec::<String>::new()));
/// assert!(is_empty(&vec!["", ""]));
/// assert!(!is_empty(&vec!["", "a"]));
/// assert!(!is_empty(&0));
/// ```
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

// An empty slice satisfies `all`, so it is empty as well.
impl<T: IsEmpty> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.iter().all(IsEmpty::is_empty_value)
    }
}

impl<T: IsEmpty> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.as_slice().is_empty_value()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsEmpty for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        assert!(is_empty(""));
        assert!(is_empty(&String::new()));
        assert!(!is_empty("a"));
        assert!(!is_empty(" "));
    }

    #[test]
    fn test_options() {
        assert!(is_empty(&None::<String>));
        assert!(is_empty(&Some(String::new())));
        assert!(!is_empty(&Some("x".to_string())));
    }

    #[test]
    fn test_collections() {
        assert!(is_empty(&Vec::<String>::new()));
        assert!(is_empty(&vec![String::new(), String::new()]));
        assert!(is_empty(&vec![Vec::<String>::new()]));
        assert!(!is_empty(&vec!["".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_maps() {
        let mut map: HashMap<String, String> = HashMap::new();
        assert!(is_empty(&map));
        map.insert("k".into(), String::new());
        assert!(!is_empty(&map));
    }

    #[test]
    fn test_scalars_are_never_empty() {
        assert!(!is_empty(&0_i64));
        assert!(!is_empty(&false));
        assert!(!is_empty(&0.0_f64));
    }
}
