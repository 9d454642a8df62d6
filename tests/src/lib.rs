//! This crate defines the integration tests for the `assertions` crate.
//!
//! These are defined in a different crate, because otherwise `proc-macro-crate` does not work
//! properly.

#[cfg(test)]
mod behavior;

#[cfg(test)]
mod tests {
    #[test]
    fn macros() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }
}
