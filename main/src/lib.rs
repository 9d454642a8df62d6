#![allow(clippy::needless_doctest_main)]

//! Runtime checks of arguments and invariants.
//!
//! Every check takes the checked value and a label naming it, and either returns the value
//! or an [`Error`] describing what was wrong with it. This allows checking a value where it is
//! used:
//!
//! ```rust
//! use assertions::{between, not_empty, not_null};
//!
//! #[derive(Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn server(host: Option<String>, port: u16) -> assertions::Result<Server> {
//!     Ok(Server {
//!         host: not_empty(not_null(host, "host")?, "host")?,
//!         port: between(port, 1024u16, 49151u16, "port")?,
//!     })
//! }
//!
//! assert!(server(Some("localhost".into()), 8080).is_ok());
//!
//! let error = server(Some("localhost".into()), 80).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Variable \"port\" must be between 1024 and 49151, inclusive. Was 80"
//! );
//! ```
//!
//! # Errors
//!
//! Failures come in two kinds:
//!
//! - [`Error::Usage`]: the check itself was used wrongly. The label is empty, something that must
//!   be there is absent (the checked value, a reference value, a collection or one of its
//!   elements), or a message template does not fit its arguments.
//! - [`Error::Violation`]: the value does not have the checked property.
//!
//! Absence is expressed with `Option`. Wherever a check accepts something that can be absent, it
//! takes an `Option` of it, and `None` is a usage error unless the check is about presence
//! itself, like [`present`] or [`equal_opt`].
//!
//! # Copies
//!
//! The `copy_*` functions check a collection and return a copy of it, made in the same pass.
//! Lists are copied into a `Vec` and sets into a `HashSet`.
//!
//! # Features
//!
//! - `tracing` (default): every failure is reported as a `debug` event when it is created.
//! - `bigint` (default): ordering checks and message arguments for `num_bigint::BigInt` and
//!   `num_bigint::BigUint`.
//! - `bigdecimal` (default): ordering checks and message arguments for
//!   `bigdecimal::BigDecimal`.

extern crate self as assertions;

mod collection;
pub mod container;
mod error;
pub mod format;
mod label;
pub mod numeric;
mod ordering;
mod scalar;

pub use crate::{
    collection::{
        all_not_null, copy_if_all_not_null, copy_if_not_empty_all_not_empty,
        copy_if_not_empty_all_not_null, copy_set_if_all_not_null,
        copy_set_if_not_empty_all_not_empty, copy_set_if_not_empty_all_not_null, not_empty,
        not_empty_all_not_empty, not_empty_all_not_null,
    },
    error::{Error, Result},
    format::{Arg, ToArg},
    ordering::{between, greater, less, not_greater, not_less, not_same_value, same_value},
    scalar::{
        equal, equal_opt, fals, not_equal, not_equal_opt, not_null, present, present_opt, tru,
    },
};

/// Checks that a condition holds, with a message template checked at compile time.
///
/// The first argument is the condition, the second a string literal template as described in
/// the [`format`] module, and the rest the arguments filling its placeholders. Each argument is
/// converted with [`ToArg`], so it is borrowed, not moved.
///
/// ```rust
/// # fn main() -> assertions::Result<()> {
/// let attempts = 3;
/// assertions::tru!(attempts < 5, "Too many attempts: %d", attempts)?;
///
/// let error = assertions::tru!(attempts > 5, "Only %d of %d attempts", attempts, 5).unwrap_err();
/// assert_eq!(error.message(), "Only 3 of 5 attempts");
/// # Ok(())
/// # }
/// ```
///
/// A template needing more arguments than given is rejected:
///
/// ```rust,compile_fail
/// let attempts = 3;
/// let _ = assertions::tru!(attempts < 5, "%d of %d attempts", attempts);
/// ```
///
/// So is one needing fewer:
///
/// ```rust,compile_fail
/// let attempts = 3;
/// let _ = assertions::tru!(attempts < 5, "Too many attempts", attempts);
/// ```
///
/// And one with a conversion that does not exist:
///
/// ```rust,compile_fail
/// let attempts = 3;
/// let _ = assertions::tru!(attempts < 5, "Too many attempts: %y", attempts);
/// ```
///
/// The template must be a literal:
///
/// ```rust,compile_fail
/// let template = "%d";
/// let _ = assertions::tru!(true, template, 3);
/// ```
///
/// Whether an argument fits its conversion is only known at runtime, a mismatch then makes a
/// failing check return a usage error.
pub use assertions_proc_macro::tru;

/// Checks that a condition does not hold, with a message template checked at compile time.
///
/// This works just like [`tru!`], but fails if the condition is true.
///
/// ```rust
/// let name = "";
/// let error = assertions::fals!(name.is_empty(), "Name %s is empty", "user").unwrap_err();
///
/// assert!(error.is_violation());
/// assert_eq!(error.message(), "Name user is empty");
/// ```
///
/// ```rust,compile_fail
/// let _ = assertions::fals!(false, "%s", 1, 2);
/// ```
pub use assertions_proc_macro::fals;
