//! Allows retrieving the name of the main crate.

use lazy_static::lazy_static;
use proc_macro2::Span;
use proc_macro_crate::FoundCrate;
use proc_macro_error::abort_call_site;
use syn::Ident;

lazy_static! {
    /// The name under which the main `assertions` crate is available to the calling crate.
    static ref CRATE_NAME: String = {
        match proc_macro_crate::crate_name("assertions") {
            // The main crate declares `extern crate self as assertions`, so this also works for
            // its own tests and documentation.
            Ok(FoundCrate::Itself) => "assertions".into(),
            Ok(FoundCrate::Name(name)) => name,
            Err(err) => abort_call_site!("crate `assertions` must be imported: {}", err),
        }
    };
}

/// Returns the name of the main crate.
pub(crate) fn crate_name() -> Ident {
    Ident::new(&CRATE_NAME, Span::call_site())
}
