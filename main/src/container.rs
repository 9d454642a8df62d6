//! Abstractions over the strings and collections the container checks accept.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::BuildHasher,
};

/// A string or collection that can be tested for absence and emptiness.
pub trait Measured {
    /// How the container is called in messages (`String`, `List`, `Set` or `Map`).
    ///
    /// Collections are named by their kind rather than all being called a `Collection`, so a
    /// message about an empty map reads `Map "x" cannot be empty`.
    const NOUN: &'static str;

    /// Whether the container exists at all.
    ///
    /// Only `Option` can be absent.
    fn is_present(&self) -> bool {
        true
    }

    /// Whether the container holds nothing.
    fn is_void(&self) -> bool;
}

/// A collection whose elements can be visited.
pub trait Elements: Measured {
    type Item;

    /// Visits every element in order, stopping at the first error.
    fn try_each<E>(&self, visit: impl FnMut(&Self::Item) -> Result<(), E>) -> Result<(), E>;

    /// The number of elements, used to presize copies.
    fn count(&self) -> usize;
}

/// A collection whose elements keep the order they were inserted in.
///
/// These are copied into a `Vec`.
pub trait Ordered: Elements {}

/// A set, copied into a `HashSet`.
pub trait Unordered: Elements {}

/// An element of a string collection, which may be absent.
pub trait Text {
    /// The string, or `None` if it is absent.
    fn text(&self) -> Option<&str>;
}

impl Measured for str {
    const NOUN: &'static str = "String";

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl Measured for String {
    const NOUN: &'static str = "String";

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl Measured for Cow<'_, str> {
    const NOUN: &'static str = "String";

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

/// Implements `Measured` and `Elements` for a collection type by delegating to its inherent
/// methods.
macro_rules! collection {
    ($noun:literal, $order:ident, [$($generics:tt)*] $ty:ty => $item:ty) => {
        impl<$($generics)*> Measured for $ty {
            const NOUN: &'static str = $noun;

            fn is_void(&self) -> bool {
                self.is_empty()
            }
        }

        impl<$($generics)*> Elements for $ty {
            type Item = $item;

            fn try_each<E>(&self, visit: impl FnMut(&Self::Item) -> Result<(), E>) -> Result<(), E> {
                self.iter().try_for_each(visit)
            }

            fn count(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> $order for $ty {}
    };
}

collection!("List", Ordered, [T] Vec<T> => T);
collection!("List", Ordered, [T] [T] => T);
collection!("List", Ordered, [T, const N: usize] [T; N] => T);
collection!("List", Ordered, [T] VecDeque<T> => T);
collection!("Set", Unordered, [T, S: BuildHasher] HashSet<T, S> => T);
collection!("Set", Unordered, [T] BTreeSet<T> => T);

impl<K, V, S> Measured for HashMap<K, V, S> {
    const NOUN: &'static str = "Map";

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    const NOUN: &'static str = "Map";

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl<C: Measured + ?Sized> Measured for &C {
    const NOUN: &'static str = C::NOUN;

    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn is_void(&self) -> bool {
        (**self).is_void()
    }
}

impl<C: Elements + ?Sized> Elements for &C {
    type Item = C::Item;

    fn try_each<E>(&self, visit: impl FnMut(&Self::Item) -> Result<(), E>) -> Result<(), E> {
        (**self).try_each(visit)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<C: Ordered + ?Sized> Ordered for &C {}

impl<C: Unordered + ?Sized> Unordered for &C {}

impl<C: Measured> Measured for Option<C> {
    const NOUN: &'static str = C::NOUN;

    fn is_present(&self) -> bool {
        self.as_ref().map_or(false, Measured::is_present)
    }

    fn is_void(&self) -> bool {
        self.as_ref().map_or(true, Measured::is_void)
    }
}

impl<C: Elements> Elements for Option<C> {
    type Item = C::Item;

    fn try_each<E>(&self, visit: impl FnMut(&Self::Item) -> Result<(), E>) -> Result<(), E> {
        match self {
            Some(collection) => collection.try_each(visit),
            None => Ok(()),
        }
    }

    fn count(&self) -> usize {
        self.as_ref().map_or(0, Elements::count)
    }
}

impl<C: Ordered> Ordered for Option<C> {}

impl<C: Unordered> Unordered for Option<C> {}

impl Text for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for Box<str> {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for Cow<'_, str> {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text> Text for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::text)
    }
}
