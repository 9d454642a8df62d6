//! Printf-style message templates, as used by [`tru`](crate::tru) and [`fals`](crate::fals).
//!
//! A placeholder has the form `%[index$][flags][width][.precision]conversion`:
//!
//! | conversion  | accepts                                   | result                               |
//! |-------------|-------------------------------------------|--------------------------------------|
//! | `s`, `S`    | anything                                  | the argument's text                  |
//! | `d`         | integers                                  | decimal                              |
//! | `x`, `X`    | integers                                  | hexadecimal                          |
//! | `o`         | integers                                  | octal                                |
//! | `f`         | floats, decimals                          | fixed point, 6 digits by default     |
//! | `e`, `E`    | floats, decimals                          | scientific, 6 digits by default      |
//! | `c`         | characters, integer code points           | the character                        |
//! | `b`, `B`    | anything                                  | `false` only for a boolean `false`   |
//! | `n`         | nothing                                   | a line break                         |
//! | `%`         | nothing                                   | a literal `%`                        |
//!
//! Upper case conversions upper case their output. The supported flags are `-` (left justify),
//! `0` (zero padding), `+` and ` ` (sign of non-negative numbers) and `,` (digit grouping).
//!
//! Widths and precisions go up to 65535, and `-` or `0` need a width.
//!
//! Every argument must be consumed by the template. Passing more arguments than the placeholders
//! use is a usage error, just like passing too few.

use std::{borrow::Cow, fmt};
use thiserror::Error;

#[cfg(feature = "bigdecimal")]
use bigdecimal::{num_bigint::Sign as DecimalSign, BigDecimal, RoundingMode};
#[cfg(feature = "bigint")]
use num_bigint::{BigInt, BigUint, Sign};

use crate::{Error, Result};

/// A value that can fill a placeholder of a message template.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Bool(bool),
    Char(char),
    /// A signed integer, together with the width of its original type in bits.
    ///
    /// The width is needed to print negative numbers in two's complement with `%x` and `%o`.
    Int { value: i128, bits: u32 },
    UInt(u128),
    Float(f64),
    Str(&'a str),
    #[cfg(feature = "bigint")]
    BigInt(&'a BigInt),
    #[cfg(feature = "bigint")]
    BigUint(&'a BigUint),
    #[cfg(feature = "bigdecimal")]
    BigDecimal(&'a BigDecimal),
    /// Any other value, usable with `%s` and `%b` only.
    Display(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    /// Wraps any displayable value.
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    fn describe(&self) -> &'static str {
        match self {
            Arg::Bool(_) => "a boolean",
            Arg::Char(_) => "a character",
            Arg::Int { .. } | Arg::UInt(_) => "an integer",
            Arg::Float(_) => "a float",
            Arg::Str(_) => "a string",
            #[cfg(feature = "bigint")]
            Arg::BigInt(_) | Arg::BigUint(_) => "an integer",
            #[cfg(feature = "bigdecimal")]
            Arg::BigDecimal(_) => "a decimal",
            Arg::Display(_) => "a displayable value",
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arg::Bool(value) => write!(f, "{}", value),
            Arg::Char(value) => write!(f, "{}", value),
            Arg::Int { value, .. } => write!(f, "{}", value),
            Arg::UInt(value) => write!(f, "{}", value),
            Arg::Float(value) => f.write_str(&float_text(*value)),
            Arg::Str(value) => f.write_str(value),
            #[cfg(feature = "bigint")]
            Arg::BigInt(value) => write!(f, "{}", value),
            #[cfg(feature = "bigint")]
            Arg::BigUint(value) => write!(f, "{}", value),
            #[cfg(feature = "bigdecimal")]
            Arg::BigDecimal(value) => write!(f, "{}", value),
            Arg::Display(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Arg({})", self)
    }
}

/// Conversion of a value into a template argument.
///
/// This is what the `tru!` and `fals!` macros call on each of their arguments.
pub trait ToArg {
    fn to_arg(&self) -> Arg<'_>;
}

macro_rules! impl_to_arg {
    (signed: $($ty:ty),*) => {
        $(
        impl ToArg for $ty {
            fn to_arg(&self) -> Arg<'_> {
                Arg::Int {
                    value: i128::from(*self),
                    bits: <$ty>::BITS,
                }
            }
        }
        )*
    };
    (unsigned: $($ty:ty),*) => {
        $(
        impl ToArg for $ty {
            fn to_arg(&self) -> Arg<'_> {
                Arg::UInt(u128::from(*self))
            }
        }
        )*
    };
}

impl_to_arg!(signed: i8, i16, i32, i64, i128);
impl_to_arg!(unsigned: u8, u16, u32, u64, u128);

impl ToArg for isize {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Int {
            value: *self as i128,
            bits: isize::BITS,
        }
    }
}

impl ToArg for usize {
    fn to_arg(&self) -> Arg<'_> {
        Arg::UInt(*self as u128)
    }
}

impl ToArg for f32 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float(f64::from(*self))
    }
}

impl ToArg for f64 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float(*self)
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Bool(*self)
    }
}

impl ToArg for char {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Char(*self)
    }
}

impl ToArg for str {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for Cow<'_, str> {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

#[cfg(feature = "bigint")]
impl ToArg for BigInt {
    fn to_arg(&self) -> Arg<'_> {
        Arg::BigInt(self)
    }
}

#[cfg(feature = "bigint")]
impl ToArg for BigUint {
    fn to_arg(&self) -> Arg<'_> {
        Arg::BigUint(self)
    }
}

#[cfg(feature = "bigdecimal")]
impl ToArg for BigDecimal {
    fn to_arg(&self) -> Arg<'_> {
        Arg::BigDecimal(self)
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<'a> ToArg for Arg<'a> {
    fn to_arg(&self) -> Arg<'_> {
        *self
    }
}

/// Fills the placeholders of `template` with `args`.
///
/// A template that does not fit its arguments is a usage error.
pub fn format(template: &str, args: &[Arg<'_>]) -> Result<String> {
    render(template, args).map_err(|reason| {
        Error::usage(format!(
            "Message template \"{}\" and its arguments are illegally formatted: {}",
            template, reason
        ))
    })
}

/// The ways a template can fail to fit its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum FormatError {
    #[error("the placeholder starting at byte {0} is incomplete")]
    Incomplete(usize),
    #[error("unknown conversion `{0}`")]
    UnknownConversion(char),
    #[error("unsupported flag `{0}`")]
    UnsupportedFlag(char),
    #[error("`{0}` combines flags that cannot be used together or with its conversion")]
    IllegalFlags(String),
    #[error("`{0}` does not accept a precision")]
    IllegalPrecision(String),
    #[error("`{0}` needs a width")]
    MissingWidth(String),
    #[error("the placeholder starting at byte {0} asks for a width or precision above 65535")]
    TooLarge(usize),
    #[error("`{0}` uses argument index 0, but indices start at 1")]
    ZeroIndex(String),
    #[error("there is no argument for `{0}`")]
    MissingArgument(String),
    #[error("`{placeholder}` cannot format {argument}")]
    Mismatch {
        placeholder: String,
        argument: &'static str,
    },
    #[error("{0} argument(s) are not used by the template")]
    Unused(usize),
}

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
}

/// A parsed placeholder.
#[derive(Debug)]
struct Placeholder<'t> {
    /// The placeholder as written in the template.
    text: &'t str,
    index: Option<usize>,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

const CONVERSIONS: &str = "sSbBcdxXofeEn%";

fn render(template: &str, args: &[Arg<'_>]) -> std::result::Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next_ordinary = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('%') {
        let percent = pos + offset;
        output.push_str(&template[pos..percent]);

        let placeholder = parse_placeholder(template, percent)?;
        pos = percent + placeholder.text.len();

        match placeholder.conversion {
            '%' => {
                placeholder.deny_precision()?;
                placeholder.deny_flags(|flags| flags.zero || flags.plus || flags.space || flags.group)?;
                output.push_str(&placeholder.pad("%".to_owned())?);
            }
            'n' => {
                placeholder.deny_precision()?;
                if placeholder.width.is_some() {
                    return Err(FormatError::IllegalFlags(placeholder.text.to_owned()));
                }
                placeholder.deny_flags(|flags| {
                    flags.left || flags.zero || flags.plus || flags.space || flags.group
                })?;
                output.push('\n');
            }
            _ => {
                let slot = match placeholder.index {
                    Some(index) => index - 1,
                    None => {
                        next_ordinary += 1;
                        next_ordinary - 1
                    }
                };
                let arg = args
                    .get(slot)
                    .ok_or_else(|| FormatError::MissingArgument(placeholder.text.to_owned()))?;
                used[slot] = true;

                output.push_str(&placeholder.convert(arg)?);
            }
        }
    }

    output.push_str(&template[pos..]);

    match used.iter().filter(|used| !**used).count() {
        0 => Ok(output),
        unused => Err(FormatError::Unused(unused)),
    }
}

/// The largest width or precision a placeholder may ask for.
const LIMIT: usize = u16::MAX as usize;

/// Returns the end of the run of ASCII digits starting at `pos`.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).map_or(false, u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Parses the placeholder whose `%` is at byte `percent`.
fn parse_placeholder(template: &str, percent: usize) -> std::result::Result<Placeholder<'_>, FormatError> {
    let bytes = template.as_bytes();
    let incomplete = || FormatError::Incomplete(percent);
    let mut pos = percent + 1;

    let mut index = None;
    let digits_end = skip_digits(bytes, pos);
    if digits_end > pos && bytes.get(digits_end) == Some(&b'$') {
        index = Some(template[pos..digits_end].parse::<usize>().map_err(|_| incomplete())?);
        pos = digits_end + 1;
    }

    let mut flags = Flags::default();
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'-' => flags.left = true,
            b'0' => flags.zero = true,
            b'+' => flags.plus = true,
            b' ' => flags.space = true,
            b',' => flags.group = true,
            b'#' | b'(' | b'<' => return Err(FormatError::UnsupportedFlag(byte as char)),
            _ => break,
        }
        pos += 1;
    }

    let bounded = |digits: &str| match digits.parse::<usize>() {
        Ok(value) if value <= LIMIT => Ok(value),
        _ => Err(FormatError::TooLarge(percent)),
    };

    let mut width = None;
    let width_end = skip_digits(bytes, pos);
    if width_end > pos {
        width = Some(bounded(&template[pos..width_end])?);
        pos = width_end;
    }

    let mut precision = None;
    if bytes.get(pos) == Some(&b'.') {
        let precision_end = skip_digits(bytes, pos + 1);
        if precision_end == pos + 1 {
            return Err(incomplete());
        }
        precision = Some(bounded(&template[pos + 1..precision_end])?);
        pos = precision_end;
    }

    let conversion = template[pos..].chars().next().ok_or_else(incomplete)?;
    if !CONVERSIONS.contains(conversion) {
        return Err(FormatError::UnknownConversion(conversion));
    }

    let placeholder = Placeholder {
        text: &template[percent..pos + conversion.len_utf8()],
        index,
        flags,
        width,
        precision,
        conversion,
    };

    if index == Some(0) {
        return Err(FormatError::ZeroIndex(placeholder.text.to_owned()));
    }
    if (flags.left || flags.zero) && width.is_none() {
        return Err(FormatError::MissingWidth(placeholder.text.to_owned()));
    }

    Ok(placeholder)
}

impl Placeholder<'_> {
    fn deny_precision(&self) -> std::result::Result<(), FormatError> {
        match self.precision {
            Some(_) => Err(FormatError::IllegalPrecision(self.text.to_owned())),
            None => Ok(()),
        }
    }

    fn deny_flags(&self, denied: impl Fn(&Flags) -> bool) -> std::result::Result<(), FormatError> {
        if denied(&self.flags) {
            Err(FormatError::IllegalFlags(self.text.to_owned()))
        } else {
            Ok(())
        }
    }

    fn mismatch(&self, arg: &Arg<'_>) -> FormatError {
        FormatError::Mismatch {
            placeholder: self.text.to_owned(),
            argument: arg.describe(),
        }
    }

    fn is_upper(&self) -> bool {
        self.conversion.is_ascii_uppercase()
    }

    /// Pads `text` with spaces to the requested width.
    fn pad(&self, text: String) -> std::result::Result<String, FormatError> {
        let width = match self.width {
            Some(width) => width,
            None => return Ok(text),
        };

        let fill = width.saturating_sub(text.chars().count());
        let padding = " ".repeat(fill);
        Ok(if self.flags.left {
            text + &padding
        } else {
            padding + &text
        })
    }

    /// Lays out a number given as its sign and its unsigned digits.
    fn number(&self, negative: bool, digits: String) -> std::result::Result<String, FormatError> {
        let flags = &self.flags;
        if (flags.plus && flags.space) || (flags.left && flags.zero) {
            return Err(FormatError::IllegalFlags(self.text.to_owned()));
        }

        let digits = if flags.group { group_thousands(&digits) } else { digits };
        let sign = if negative {
            "-"
        } else if flags.plus {
            "+"
        } else if flags.space {
            " "
        } else {
            ""
        };

        match (flags.zero, self.width) {
            (true, Some(width)) => {
                let fill = width.saturating_sub(sign.len() + digits.chars().count());
                Ok(format!("{}{}{}", sign, "0".repeat(fill), digits))
            }
            _ => self.pad(format!("{}{}", sign, digits)),
        }
    }

    fn convert(&self, arg: &Arg<'_>) -> std::result::Result<String, FormatError> {
        match self.conversion {
            's' | 'S' | 'b' | 'B' => {
                self.deny_flags(|flags| flags.zero || flags.plus || flags.space || flags.group)?;
                let mut text = match (self.conversion, arg) {
                    ('b' | 'B', Arg::Bool(value)) => value.to_string(),
                    ('b' | 'B', _) => "true".to_owned(),
                    _ => arg.to_string(),
                };
                if let Some(precision) = self.precision {
                    text = text.chars().take(precision).collect();
                }
                if self.is_upper() {
                    text = text.to_uppercase();
                }
                self.pad(text)
            }
            'c' => {
                self.deny_precision()?;
                self.deny_flags(|flags| flags.zero || flags.plus || flags.space || flags.group)?;
                let character = match *arg {
                    Arg::Char(value) => Some(value),
                    Arg::Int { value, .. } => u32::try_from(value).ok().and_then(char::from_u32),
                    Arg::UInt(value) => u32::try_from(value).ok().and_then(char::from_u32),
                    _ => None,
                };
                let character = character.ok_or_else(|| self.mismatch(arg))?;
                self.pad(character.to_string())
            }
            'd' => {
                self.deny_precision()?;
                let (negative, digits) = match *arg {
                    Arg::Int { value, .. } => (value < 0, value.unsigned_abs().to_string()),
                    Arg::UInt(value) => (false, value.to_string()),
                    #[cfg(feature = "bigint")]
                    Arg::BigInt(value) => (value.sign() == Sign::Minus, value.magnitude().to_string()),
                    #[cfg(feature = "bigint")]
                    Arg::BigUint(value) => (false, value.to_string()),
                    _ => return Err(self.mismatch(arg)),
                };
                self.number(negative, digits)
            }
            'x' | 'X' | 'o' => {
                self.deny_precision()?;
                self.deny_flags(|flags| flags.plus || flags.space || flags.group)?;
                let hex = self.conversion != 'o';
                let radix = |value: u128| {
                    if hex {
                        format!("{:x}", value)
                    } else {
                        format!("{:o}", value)
                    }
                };
                let (negative, mut digits) = match *arg {
                    Arg::Int { value, bits } => {
                        let mask = if bits >= 128 { u128::MAX } else { (1u128 << bits) - 1 };
                        (false, radix(value as u128 & mask))
                    }
                    Arg::UInt(value) => (false, radix(value)),
                    #[cfg(feature = "bigint")]
                    Arg::BigInt(value) => {
                        let digits = if hex {
                            format!("{:x}", value.magnitude())
                        } else {
                            format!("{:o}", value.magnitude())
                        };
                        (value.sign() == Sign::Minus, digits)
                    }
                    #[cfg(feature = "bigint")]
                    Arg::BigUint(value) => {
                        let digits = if hex {
                            format!("{:x}", value)
                        } else {
                            format!("{:o}", value)
                        };
                        (false, digits)
                    }
                    _ => return Err(self.mismatch(arg)),
                };
                if self.is_upper() {
                    digits = digits.to_uppercase();
                }
                self.number(negative, digits)
            }
            'f' | 'e' | 'E' => {
                if self.conversion != 'f' {
                    self.deny_flags(|flags| flags.group)?;
                }
                let precision = self.precision.unwrap_or(6);

                let (negative, digits) = match *arg {
                    Arg::Float(value) if value.is_nan() => return self.pad("NaN".to_owned()),
                    Arg::Float(value) if value.is_infinite() => {
                        (value.is_sign_negative(), "Infinity".to_owned())
                    }
                    Arg::Float(value) if self.conversion == 'f' => {
                        (value.is_sign_negative(), format!("{:.*}", precision, value.abs()))
                    }
                    Arg::Float(value) => (value.is_sign_negative(), scientific(value.abs(), precision)),
                    #[cfg(feature = "bigdecimal")]
                    Arg::BigDecimal(value) if self.conversion == 'f' => decimal_fixed(value, precision),
                    #[cfg(feature = "bigdecimal")]
                    Arg::BigDecimal(value) => decimal_scientific(value, precision),
                    _ => return Err(self.mismatch(arg)),
                };
                let digits = if self.is_upper() { digits.to_uppercase() } else { digits };
                self.number(negative, digits)
            }
            other => Err(FormatError::UnknownConversion(other)),
        }
    }
}

/// Writes a float the way `%s` shows it: always with a fractional part or an exponent.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else {
        format!("{:?}", value)
    }
}

/// Formats a non-negative float in scientific notation with a signed, two digit exponent.
fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent = exponent.parse::<i32>().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Places a decimal point `scale` digits from the right of `digits`, padding with zeros.
#[cfg(feature = "bigdecimal")]
fn place_point(digits: String, scale: usize) -> String {
    if scale == 0 {
        return digits;
    }
    let digits = format!("{:0>width$}", digits, width = scale + 1);
    let (integral, fraction) = digits.split_at(digits.len() - scale);
    format!("{}.{}", integral, fraction)
}

/// Formats a decimal in fixed point, rounding half up. Returns the sign and the digits.
#[cfg(feature = "bigdecimal")]
fn decimal_fixed(value: &BigDecimal, precision: usize) -> (bool, String) {
    let rounded = value.with_scale_round(precision as i64, RoundingMode::HalfUp);
    let (unscaled, _) = rounded.as_bigint_and_exponent();
    (
        unscaled.sign() == DecimalSign::Minus,
        place_point(unscaled.magnitude().to_string(), precision),
    )
}

/// Formats a decimal in scientific notation, rounding half up. Returns the sign and the digits.
#[cfg(feature = "bigdecimal")]
fn decimal_scientific(value: &BigDecimal, precision: usize) -> (bool, String) {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    let negative = unscaled.sign() == DecimalSign::Minus;
    let digits = unscaled.magnitude().to_string();
    if digits.chars().all(|digit| digit == '0') {
        return (negative, format!("{}e+00", place_point("0".repeat(precision + 1), precision)));
    }

    // The digits as a mantissa with a single integral digit.
    let mut exponent = digits.len() as i64 - 1 - scale;
    let mantissa = BigDecimal::new(unscaled.magnitude().clone().into(), digits.len() as i64 - 1)
        .with_scale_round(precision as i64, RoundingMode::HalfUp);
    let mut mantissa = mantissa.as_bigint_and_exponent().0.magnitude().to_string();
    if mantissa.len() > precision + 1 {
        // Rounding carried into a new digit, as in 9.99 to 10.0.
        mantissa.truncate(precision + 1);
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    (
        negative,
        format!("{}e{}{:02}", place_point(mantissa, precision), sign, exponent.abs()),
    )
}

/// Inserts `,` between groups of three digits in the integral part.
fn group_thousands(digits: &str) -> String {
    let integral_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let (integral, rest) = digits.split_at(integral_len);

    let mut grouped = String::with_capacity(digits.len() + integral_len / 3);
    for (i, digit) in integral.chars().enumerate() {
        if i > 0 && (integral_len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(rest);
    grouped
}
