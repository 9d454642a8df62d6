//! Checks on single values: presence, truth and equality.

use std::fmt;

use crate::{format::Arg, label, Error, Result};

/// Checks that `value` is present, and returns what it holds.
///
/// ```rust
/// # fn main() -> assertions::Result<()> {
/// let port = assertions::not_null(Some(8080), "port")?;
/// assert_eq!(port, 8080);
///
/// let error = assertions::not_null(None::<u16>, "port").unwrap_err();
/// assert_eq!(error.message(), "Variable \"port\" cannot be absent");
/// # Ok(())
/// # }
/// ```
pub fn not_null<T>(value: Option<T>, label: &str) -> Result<T> {
    label::check(label, "variable")?;

    value.ok_or_else(|| Error::usage(format!("Variable \"{}\" cannot be absent", label)))
}

/// Checks that the optional `value` holds something, and returns it.
pub fn present<T>(value: Option<T>, label: &str) -> Result<T> {
    label::check(label, "variable")?;

    value.ok_or_else(|| Error::violation(format!("Variable \"{}\" must be present", label)))
}

/// Checks that an optional value which may itself be absent is there and holds something.
///
/// An absent outer `Option` is a usage error, an empty inner one a violation.
pub fn present_opt<T>(value: Option<Option<T>>, label: &str) -> Result<T> {
    present(not_null(value, label)?, label)
}

/// Checks that `test` holds.
///
/// On failure, the violation's message is `template` with its placeholders filled in by
/// `args`, see the [`format`](crate::format) module. The template is only looked at when `test`
/// is false. Prefer the [`tru!`](crate::tru!) macro, which checks the template while compiling.
pub fn tru(test: bool, template: &str, args: &[Arg<'_>]) -> Result<()> {
    if test {
        Ok(())
    } else {
        Err(Error::violation(crate::format::format(template, args)?))
    }
}

/// Checks that `test` does not hold.
///
/// The counterpart of [`tru`].
pub fn fals(test: bool, template: &str, args: &[Arg<'_>]) -> Result<()> {
    tru(!test, template, args)
}

/// Checks that `value` equals `reference`.
///
/// Equality is `PartialEq`, so floats compare exactly: `0.1 + 0.2` is not equal to `0.3` and
/// `NaN` is not equal to anything.
pub fn equal<T, R>(value: T, reference: R, label: &str) -> Result<T>
where
    T: PartialEq<R> + fmt::Display,
    R: fmt::Display,
{
    label::check(label, "variable")?;

    if value != reference {
        return Err(Error::violation(format!(
            "Variable \"{}\" must be equal to {}. Was {}",
            label, reference, value
        )));
    }

    Ok(value)
}

/// Checks that `value` does not equal `reference`.
pub fn not_equal<T, R>(value: T, reference: R, label: &str) -> Result<T>
where
    T: PartialEq<R>,
    R: fmt::Display,
{
    label::check(label, "variable")?;

    if value == reference {
        return Err(Error::violation(format!(
            "Variable \"{}\" must not be equal to {}",
            label, reference
        )));
    }

    Ok(value)
}

/// Checks that two values which may be absent are equal.
///
/// Two absent values are equal, an absent and a present one are not.
pub fn equal_opt<T, R>(value: Option<T>, reference: Option<R>, label: &str) -> Result<Option<T>>
where
    T: PartialEq<R> + fmt::Display,
    R: fmt::Display,
{
    label::check(label, "variable")?;

    let equal = match (&value, &reference) {
        (None, None) => true,
        (Some(value), Some(reference)) => value == reference,
        _ => false,
    };

    if !equal {
        return Err(Error::violation(format!(
            "Variable \"{}\" must be equal to {}. Was {}",
            label,
            Shown(reference.as_ref()),
            Shown(value.as_ref())
        )));
    }

    Ok(value)
}

/// Checks that two values which may be absent are not equal.
pub fn not_equal_opt<T, R>(value: Option<T>, reference: Option<R>, label: &str) -> Result<Option<T>>
where
    T: PartialEq<R>,
    R: fmt::Display,
{
    label::check(label, "variable")?;

    match (&value, &reference) {
        (None, None) => Err(Error::violation(format!(
            "Variable \"{}\" must not be equal to the given reference value. Both are absent",
            label
        ))),
        (Some(current), Some(reference)) if current == reference => {
            Err(Error::violation(format!(
                "Variable \"{}\" must not be equal to {}",
                label, reference
            )))
        }
        _ => Ok(value),
    }
}

/// Shows an optional value, spelling out absence.
struct Shown<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("absent"),
        }
    }
}
