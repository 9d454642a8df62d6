//! Validation of the label naming the checked value.

use crate::{Error, Result};

/// Makes sure a label was given.
///
/// `kind` names what the label refers to (`variable`, `string`, `list`, ...) and is only used in
/// the message.
pub(crate) fn check(label: &str, kind: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::usage(format!(
            "{0} name cannot be empty. This is about the name of the {0}, not the {0} itself!",
            kind
        )));
    }

    Ok(())
}
