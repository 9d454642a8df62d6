//! Finds the arguments a message template refers to.
//!
//! This follows the placeholder syntax of the `assertions::format` module, but only as far as
//! needed to know which arguments are used. Whether an argument fits its conversion depends on
//! its type, which is only known at runtime.

use std::{collections::BTreeSet, fmt};

/// The conversions a placeholder may end in.
const CONVERSIONS: &str = "sSbBcdxXofeEn%";

/// The largest width or precision a placeholder may ask for.
const LIMIT: usize = u16::MAX as usize;

/// A problem found in a template.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TemplateError {
    /// A `%` at the given byte offset that does not start a complete placeholder.
    Incomplete(usize),
    UnknownConversion(char),
    UnsupportedFlag(char),
    ZeroIndex(usize),
    /// A width or precision above [`LIMIT`].
    TooLarge(usize),
    /// A `-` or `0` flag without a width.
    MissingWidth(usize),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemplateError::Incomplete(offset) => {
                write!(f, "the placeholder starting at byte {} is incomplete", offset)
            }
            TemplateError::UnknownConversion(conversion) => {
                write!(f, "unknown conversion `{}`", conversion)
            }
            TemplateError::UnsupportedFlag(flag) => write!(f, "unsupported flag `{}`", flag),
            TemplateError::ZeroIndex(offset) => write!(
                f,
                "the placeholder starting at byte {} uses argument index 0, but indices start at 1",
                offset
            ),
            TemplateError::TooLarge(offset) => write!(
                f,
                "the placeholder starting at byte {} asks for a width or precision above {}",
                offset, LIMIT
            ),
            TemplateError::MissingWidth(offset) => write!(
                f,
                "the placeholder starting at byte {} justifies or pads without a width",
                offset
            ),
        }
    }
}

/// How the arguments given to a macro call fit the template.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Arity {
    Fits,
    /// The template needs `needed` arguments, but fewer were given.
    Missing { needed: usize },
    /// The arguments at these positions are never used.
    Unused(Vec<usize>),
}

/// The zero based positions of all arguments a template refers to.
pub(crate) fn used_arguments(template: &str) -> Result<BTreeSet<usize>, TemplateError> {
    let bytes = template.as_bytes();
    let mut used = BTreeSet::new();
    let mut next_ordinary = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('%') {
        let percent = pos + offset;
        pos = percent + 1;

        let mut index = None;
        let digits_end = skip_digits(bytes, pos);
        if digits_end > pos && bytes.get(digits_end) == Some(&b'$') {
            index = Some(
                template[pos..digits_end]
                    .parse::<usize>()
                    .map_err(|_| TemplateError::Incomplete(percent))?,
            );
            pos = digits_end + 1;
        }

        let mut needs_width = false;
        while let Some(&byte) = bytes.get(pos) {
            match byte {
                b'-' | b'0' => needs_width = true,
                b'+' | b' ' | b',' => {}
                b'#' | b'(' | b'<' => return Err(TemplateError::UnsupportedFlag(byte as char)),
                _ => break,
            }
            pos += 1;
        }

        let bounded = |digits: &str| match digits.parse::<usize>() {
            Ok(value) if value <= LIMIT => Ok(()),
            _ => Err(TemplateError::TooLarge(percent)),
        };

        let width_end = skip_digits(bytes, pos);
        let has_width = width_end > pos;
        if has_width {
            bounded(&template[pos..width_end])?;
        }
        pos = width_end;

        if bytes.get(pos) == Some(&b'.') {
            let precision_end = skip_digits(bytes, pos + 1);
            if precision_end == pos + 1 {
                return Err(TemplateError::Incomplete(percent));
            }
            bounded(&template[pos + 1..precision_end])?;
            pos = precision_end;
        }

        let conversion = template[pos..]
            .chars()
            .next()
            .ok_or(TemplateError::Incomplete(percent))?;
        if !CONVERSIONS.contains(conversion) {
            return Err(TemplateError::UnknownConversion(conversion));
        }
        pos += conversion.len_utf8();

        if index == Some(0) {
            return Err(TemplateError::ZeroIndex(percent));
        }
        if needs_width && !has_width {
            return Err(TemplateError::MissingWidth(percent));
        }

        match (conversion, index) {
            ('%' | 'n', _) => {}
            (_, Some(index)) => {
                used.insert(index - 1);
            }
            (_, None) => {
                used.insert(next_ordinary);
                next_ordinary += 1;
            }
        }
    }

    Ok(used)
}

/// Compares the arguments a template uses with the number of arguments given.
pub(crate) fn arity(used: &BTreeSet<usize>, given: usize) -> Arity {
    match used.iter().next_back() {
        Some(&last) if last >= given => Arity::Missing { needed: last + 1 },
        _ => {
            let unused: Vec<_> = (0..given).filter(|arg| !used.contains(arg)).collect();

            if unused.is_empty() {
                Arity::Fits
            } else {
                Arity::Unused(unused)
            }
        }
    }
}

/// Returns the end of the run of ASCII digits starting at `pos`.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).map_or(false, u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}
