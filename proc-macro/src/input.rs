//! Parsing of the input of the `tru!` and `fals!` macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, ExprLit, Lit, LitStr, Token,
};

/// The input of a check: `test, "template", args...`.
pub(crate) struct CheckInput {
    pub(crate) test: Expr,
    pub(crate) template: LitStr,
    pub(crate) args: Punctuated<Expr, Token![,]>,
}

impl Parse for CheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let test = input.parse()?;
        input.parse::<Token![,]>()?;

        let template: Expr = input.parse()?;
        let template = template_literal(&template).ok_or_else(|| {
            syn::Error::new_spanned(&template, "the message template must be a string literal")
        })?;

        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(CheckInput {
            test,
            template,
            args,
        })
    }
}

/// Extracts the string literal, which may be wrapped in an invisible group by `macro_rules`.
fn template_literal(expr: &Expr) -> Option<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(template),
            ..
        }) => Some(template.clone()),
        Expr::Group(group) => template_literal(&group.expr),
        _ => None,
    }
}
