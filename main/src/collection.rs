//! Checks on strings and collections, and the checked copies of collections.
//!
//! The checks that return their input give back the very container they were passed, so a
//! reference passed in comes back as the same reference:
//!
//! ```rust
//! # fn main() -> assertions::Result<()> {
//! let hosts = vec![Some("a.example"), Some("b.example")];
//!
//! let checked = assertions::not_empty_all_not_null(&hosts, "hosts")?;
//! assert!(std::ptr::eq(checked, &hosts));
//! # Ok(())
//! # }
//! ```
//!
//! The `copy_*` functions instead return a new container holding clones of the elements, checked
//! and copied in a single pass. Later changes to the original do not affect the copy:
//!
//! ```rust
//! # fn main() -> assertions::Result<()> {
//! let mut hosts = vec![Some("a.example".to_owned())];
//!
//! let copy: Vec<String> = assertions::copy_if_all_not_null(&hosts, "hosts")?;
//! hosts.push(None);
//!
//! assert_eq!(copy, ["a.example"]);
//! # Ok(())
//! # }
//! ```

use std::{collections::HashSet, hash::Hash, iter};

use crate::{
    container::{Elements, Measured, Ordered, Text, Unordered},
    label, Error, Result,
};

/// Checks the label, then that the container itself is there.
fn require_present<C: Measured + ?Sized>(collection: &C, label: &str) -> Result<()> {
    label::check(label, &C::NOUN.to_lowercase())?;

    if !collection.is_present() {
        return Err(Error::usage(format!(
            "{} \"{}\" cannot be absent",
            C::NOUN,
            label
        )));
    }

    Ok(())
}

fn require_filled<C: Measured + ?Sized>(collection: &C, label: &str) -> Result<()> {
    if collection.is_void() {
        return Err(Error::violation(format!(
            "{} \"{}\" cannot be empty",
            C::NOUN,
            label
        )));
    }

    Ok(())
}

fn absent_element(noun: &str, label: &str) -> Error {
    Error::usage(format!(
        "No element in {} \"{}\" may be absent",
        noun.to_lowercase(),
        label
    ))
}

/// Checks that a string element is there and not empty, returning it.
fn filled_text<'t>(element: &'t impl Text, noun: &str, label: &str) -> Result<&'t str> {
    match element.text() {
        None => Err(Error::usage(format!(
            "No string in {} \"{}\" may be absent",
            noun.to_lowercase(),
            label
        ))),
        Some("") => Err(Error::violation(format!(
            "No string in {} \"{}\" may be empty",
            noun.to_lowercase(),
            label
        ))),
        Some(text) => Ok(text),
    }
}

/// Checks every element of `collection` for presence while cloning it into `copy`.
fn copy_present<C, T, B>(collection: &C, label: &str, mut copy: B) -> Result<B>
where
    C: Elements<Item = Option<T>> + ?Sized,
    T: Clone,
    B: Extend<T>,
{
    collection.try_each(|element| match element {
        Some(element) => {
            copy.extend(iter::once(element.clone()));
            Ok(())
        }
        None => Err(absent_element(C::NOUN, label)),
    })?;

    Ok(copy)
}

/// Checks every string of `collection` while copying it into `copy`.
fn copy_filled<C, B>(collection: &C, label: &str, mut copy: B) -> Result<B>
where
    C: Elements + ?Sized,
    C::Item: Text,
    B: Extend<String>,
{
    collection.try_each(|element| {
        let text = filled_text(element, C::NOUN, label)?;
        copy.extend(iter::once(text.to_owned()));
        Ok(())
    })?;

    Ok(copy)
}

/// Checks that a string or collection is present and not empty.
pub fn not_empty<C: Measured>(collection: C, label: &str) -> Result<C> {
    require_present(&collection, label)?;
    require_filled(&collection, label)?;

    Ok(collection)
}

/// Checks that a collection and all of its elements are present.
pub fn all_not_null<C, T>(collection: C, label: &str) -> Result<C>
where
    C: Elements<Item = Option<T>>,
{
    require_present(&collection, label)?;
    collection.try_each(|element| match element {
        Some(_) => Ok(()),
        None => Err(absent_element(C::NOUN, label)),
    })?;

    Ok(collection)
}

/// Checks that a collection is present, not empty, and all of its elements are present.
pub fn not_empty_all_not_null<C, T>(collection: C, label: &str) -> Result<C>
where
    C: Elements<Item = Option<T>>,
{
    require_present(&collection, label)?;
    require_filled(&collection, label)?;
    all_not_null(collection, label)
}

/// Checks that a collection of strings is present and not empty, and that none of its strings
/// is absent or empty.
pub fn not_empty_all_not_empty<C>(collection: C, label: &str) -> Result<C>
where
    C: Elements,
    C::Item: Text,
{
    require_present(&collection, label)?;
    require_filled(&collection, label)?;
    collection.try_each(|element| filled_text(element, C::NOUN, label).map(drop))?;

    Ok(collection)
}

/// Copies an ordered collection into a `Vec`, checking that no element is absent.
pub fn copy_if_all_not_null<C, T>(list: &C, label: &str) -> Result<Vec<T>>
where
    C: Ordered<Item = Option<T>> + ?Sized,
    T: Clone,
{
    require_present(list, label)?;
    copy_present(list, label, Vec::with_capacity(list.count()))
}

/// Copies a set into a `HashSet`, checking that no element is absent.
pub fn copy_set_if_all_not_null<C, T>(set: &C, label: &str) -> Result<HashSet<T>>
where
    C: Unordered<Item = Option<T>> + ?Sized,
    T: Clone + Eq + Hash,
{
    require_present(set, label)?;
    copy_present(set, label, HashSet::with_capacity(set.count()))
}

/// Like [`copy_if_all_not_null`], but also rejects an empty list.
pub fn copy_if_not_empty_all_not_null<C, T>(list: &C, label: &str) -> Result<Vec<T>>
where
    C: Ordered<Item = Option<T>> + ?Sized,
    T: Clone,
{
    require_present(list, label)?;
    require_filled(list, label)?;
    copy_present(list, label, Vec::with_capacity(list.count()))
}

/// Like [`copy_set_if_all_not_null`], but also rejects an empty set.
pub fn copy_set_if_not_empty_all_not_null<C, T>(set: &C, label: &str) -> Result<HashSet<T>>
where
    C: Unordered<Item = Option<T>> + ?Sized,
    T: Clone + Eq + Hash,
{
    require_present(set, label)?;
    require_filled(set, label)?;
    copy_present(set, label, HashSet::with_capacity(set.count()))
}

/// Copies a non-empty list of strings into a `Vec<String>`, rejecting absent and empty strings.
pub fn copy_if_not_empty_all_not_empty<C>(list: &C, label: &str) -> Result<Vec<String>>
where
    C: Ordered + ?Sized,
    C::Item: Text,
{
    require_present(list, label)?;
    require_filled(list, label)?;
    copy_filled(list, label, Vec::with_capacity(list.count()))
}

/// Copies a non-empty set of strings into a `HashSet<String>`, rejecting absent and empty
/// strings.
pub fn copy_set_if_not_empty_all_not_empty<C>(set: &C, label: &str) -> Result<HashSet<String>>
where
    C: Unordered + ?Sized,
    C::Item: Text,
{
    require_present(set, label)?;
    require_filled(set, label)?;
    copy_filled(set, label, HashSet::with_capacity(set.count()))
}
