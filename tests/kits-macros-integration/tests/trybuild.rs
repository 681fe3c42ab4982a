//! trybuild compile-time tests for kits_macros

#[test]
fn trybuild_kit_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/kit_ok.rs");
}
