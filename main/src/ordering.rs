//! Checks comparing a number against reference values.
//!
//! Every check takes its operands as [`Operand`]s, so a number, a reference to one or an
//! `Option` of either can be passed, as long as all operands are the same kind of number. An
//! absent operand is a usage error. The comparison is `PartialOrd`, which for decimals is by
//! value, so `1.5` and `1.500` are the same value.
//!
//! ```rust
//! # fn main() -> assertions::Result<()> {
//! let retries = assertions::between(3, 0, 10, "retries")?;
//! let timeout = assertions::greater(&2.5, 0.0, "timeout")?;
//!
//! let error = assertions::less(Some(11u32), None::<u32>, "retries").unwrap_err();
//! assert!(error.is_usage());
//! # let _ = (retries, timeout);
//! # Ok(())
//! # }
//! ```
//!
//! An unordered pair of floats, involving `NaN`, satisfies no comparison. Since each check fails
//! on the comparison opposite to the one it asserts, `greater(NaN, 1.0)` does not fail.

use std::{cmp::Ordering, fmt};

use crate::{label, numeric::Operand, Error, Result};

/// The numbers behind the operands of a check, once their presence is established.
fn values<'a, V, R>(
    value: &'a V,
    reference: &'a R,
    label: &str,
) -> Result<(&'a V::Value, &'a V::Value)>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    label::check(label, "variable")?;

    let value = value
        .operand()
        .ok_or_else(|| Error::usage(format!("Variable \"{}\" cannot be absent", label)))?;
    let reference = reference.operand().ok_or_else(|| {
        Error::usage(format!("Reference value for \"{}\" cannot be absent", label))
    })?;

    Ok((value, reference))
}

/// Builds the violation `Variable "label" must <requirement>. Was <value>`.
fn violation<N>(label: &str, requirement: fmt::Arguments<'_>, value: &N) -> Error
where
    N: fmt::Display + ?Sized,
{
    Error::violation(format!(
        "Variable \"{}\" must {}. Was {}",
        label, requirement, value
    ))
}

/// Checks that `value` is numerically equal to `reference`.
///
/// Unlike [`equal`](crate::equal), this uses the three-way comparison, so decimals with
/// different scales but the same value pass.
pub fn same_value<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current.partial_cmp(reference) != Some(Ordering::Equal) {
        return Err(violation(label, format_args!("be equal to {}", reference), current));
    }

    Ok(value)
}

/// Checks that `value` is not numerically equal to `reference`.
pub fn not_same_value<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current.partial_cmp(reference) == Some(Ordering::Equal) {
        return Err(Error::violation(format!(
            "Variable \"{}\" must not be equal to {}",
            label, reference
        )));
    }

    Ok(value)
}

/// Checks that `value > reference`.
pub fn greater<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current <= reference {
        return Err(violation(label, format_args!("be greater than {}", reference), current));
    }

    Ok(value)
}

/// Checks that `value <= reference`.
pub fn not_greater<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current > reference {
        return Err(violation(
            label,
            format_args!("not be greater than {}", reference),
            current,
        ));
    }

    Ok(value)
}

/// Checks that `value < reference`.
pub fn less<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current >= reference {
        return Err(violation(label, format_args!("be less than {}", reference), current));
    }

    Ok(value)
}

/// Checks that `value >= reference`.
pub fn not_less<V, R>(value: V, reference: R, label: &str) -> Result<V>
where
    V: Operand,
    R: Operand<Value = V::Value>,
{
    let (current, reference) = values(&value, &reference, label)?;

    if current < reference {
        return Err(violation(label, format_args!("not be less than {}", reference), current));
    }

    Ok(value)
}

/// Checks that `low <= value <= high`.
pub fn between<V, L, H>(value: V, low: L, high: H, label: &str) -> Result<V>
where
    V: Operand,
    L: Operand<Value = V::Value>,
    H: Operand<Value = V::Value>,
{
    let (current, low) = values(&value, &low, label)?;
    let (_, high) = values(&value, &high, label)?;

    if current < low || current > high {
        return Err(violation(
            label,
            format_args!("be between {} and {}, inclusive", low, high),
            current,
        ));
    }

    Ok(value)
}
