//! Procedural macro implementations for `assertions`.
//!
//! The macros are documented where they are re-exported, in the main crate.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_error::{abort, emit_error, proc_macro_error};
use quote::quote;
use syn::{parse_macro_input, Ident};

use crate::{
    crate_name::crate_name,
    input::CheckInput,
    template::{arity, used_arguments, Arity},
};

mod crate_name;
mod input;
mod template;

/// Checks that a condition holds, with a message template checked at compile time.
#[proc_macro]
#[proc_macro_error]
pub fn tru(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CheckInput);

    check(input, "tru").into()
}

/// Checks that a condition does not hold, with a message template checked at compile time.
#[proc_macro]
#[proc_macro_error]
pub fn fals(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CheckInput);

    check(input, "fals").into()
}

/// Validates the template against the arguments and renders the call to `function`.
fn check(input: CheckInput, function: &str) -> TokenStream2 {
    // Stands in for the call when the input is rejected.
    proc_macro_error::set_dummy(quote! { ::core::unimplemented!() });

    let used = match used_arguments(&input.template.value()) {
        Ok(used) => used,
        Err(err) => abort!(&input.template, "invalid message template: {}", err),
    };

    match arity(&used, input.args.len()) {
        Arity::Fits => {}
        Arity::Missing { needed } => abort!(
            &input.template,
            "the message template needs {} argument(s), but {} were given",
            needed,
            input.args.len()
        ),
        Arity::Unused(unused) => {
            for position in unused {
                emit_error!(
                    &input.args[position],
                    "this argument is not used by the message template"
                );
            }
        }
    }

    render(&crate_name(), &Ident::new(function, Span::call_site()), &input)
}

/// Renders the call of the runtime check, converting every argument with `ToArg`.
fn render(krate: &Ident, function: &Ident, input: &CheckInput) -> TokenStream2 {
    let CheckInput {
        test,
        template,
        args,
    } = input;
    let args = args.iter();

    quote! {
        ::#krate::#function(#test, #template, &[#(::#krate::ToArg::to_arg(&(#args))),*])
    }
}
