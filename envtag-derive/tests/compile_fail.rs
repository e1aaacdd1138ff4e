//! Compile-fail tests to verify error messages
//!
//! These tests ensure that unsupported inputs and malformed `#[envtag(...)]`
//! attributes are rejected at compile time with a clear message.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
