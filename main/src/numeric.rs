//! The numbers the ordering checks compare.

use std::fmt;

/// A number with a three-way comparison and a printable form, or a reference to one.
///
/// Implemented for the primitive integers and floats and, with the `bigint` and `bigdecimal`
/// features, for arbitrary precision integers and decimals. For decimals the comparison is by
/// value, so `1.5` and `1.500` compare equal.
pub trait Magnitude {
    /// The number behind any references.
    type Number: PartialOrd + fmt::Display + ?Sized;

    fn number(&self) -> &Self::Number;
}

macro_rules! magnitude {
    ($($ty:ty),* $(,)?) => {
        $(
        impl Magnitude for $ty {
            type Number = $ty;

            fn number(&self) -> &$ty {
                self
            }
        }
        )*
    };
}

magnitude!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

cfg_if::cfg_if! {
    if #[cfg(feature = "bigint")] {
        magnitude!(num_bigint::BigInt, num_bigint::BigUint);
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "bigdecimal")] {
        magnitude!(bigdecimal::BigDecimal);
    }
}

impl<T: Magnitude + ?Sized> Magnitude for &T {
    type Number = T::Number;

    fn number(&self) -> &T::Number {
        (**self).number()
    }
}

/// An operand of an ordering check: a number, or an `Option` of one.
///
/// Owned numbers and references to them mix freely, `greater(&a, 1, "a")` compares an `&i32`
/// with an `i32`. An absent operand is a usage error, not a failed comparison.
pub trait Operand {
    type Value: PartialOrd + fmt::Display + ?Sized;

    /// The number, or `None` if it is absent.
    fn operand(&self) -> Option<&Self::Value>;
}

impl<T: Magnitude> Operand for T {
    type Value = T::Number;

    fn operand(&self) -> Option<&T::Number> {
        Some(self.number())
    }
}

impl<T: Magnitude> Operand for Option<T> {
    type Value = T::Number;

    fn operand(&self) -> Option<&T::Number> {
        self.as_ref().map(Magnitude::number)
    }
}
