// crates/bundle-gate-core/tests/suite.rs
// ============================================================================
// Module: Suite Builder Tests
// Description: Verifies case construction and case independence.
// Purpose: Ensure one isolated pass/fail case per enumerated resource.
// ============================================================================

//! ## Overview
//! Verifies the suite builder produces one case per resource in enumeration
//! order and that one case's defect never affects another case's outcome.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use bundle_gate_core::PROPERTIES_EXTENSION;
use bundle_gate_core::Resource;
use bundle_gate_core::SuiteBuilder;
use bundle_gate_core::ValidatorOptions;

#[test]
fn builds_one_case_per_resource_in_order() {
    let builder = SuiteBuilder::new(ValidatorOptions::default());
    let cases = builder.build(vec![
        Resource::from_bytes(&b"a=1\n"[..], "first.properties"),
        Resource::from_bytes(&b"b=2\n"[..], "second.properties"),
        Resource::from_bytes(&b"c=3\n"[..], "third.properties"),
    ]);
    let names: Vec<&str> = cases.iter().map(|case| case.name()).collect();
    assert_eq!(names, vec!["first.properties", "second.properties", "third.properties"]);
}

#[test]
fn empty_enumeration_builds_an_empty_suite() {
    let builder = SuiteBuilder::new(ValidatorOptions::default());
    assert!(builder.build(Vec::new()).is_empty());
}

#[test]
fn one_failing_case_does_not_affect_the_others() {
    let builder = SuiteBuilder::new(ValidatorOptions::default());
    let cases = builder.build(vec![
        Resource::from_bytes(&b"clean=1\n"[..], "clean.properties"),
        Resource::from_bytes(&b"dup=1\ndup=2\n"[..], "dup.properties"),
        Resource::from_bytes(&b"also=clean\n"[..], "also.properties"),
    ]);
    let outcomes: Vec<bool> = cases.iter().map(|case| case.run().is_ok()).collect();
    assert_eq!(outcomes, vec![true, false, true]);
}

#[test]
fn cases_carry_the_builder_options() {
    let ambiguous = &b"greeting=caf\xC3\xA9\n"[..];

    let gated = SuiteBuilder::new(ValidatorOptions::new(true));
    let cases = gated.build(vec![Resource::from_bytes(ambiguous, "a.properties")]);
    assert!(cases[0].run().is_err());

    let ungated = SuiteBuilder::new(ValidatorOptions::new(false));
    let cases = ungated.build(vec![Resource::from_bytes(ambiguous, "a.properties")]);
    assert!(cases[0].run().is_ok());
}

#[test]
fn rerunning_a_case_yields_the_same_verdict() {
    let builder = SuiteBuilder::new(ValidatorOptions::default());
    let cases = builder.build(vec![Resource::from_bytes(&b"dup=1\ndup=2\n"[..], "x.properties")]);
    let first = cases[0].run().map_err(|err| err.to_string());
    let second = cases[0].run().map_err(|err| err.to_string());
    assert_eq!(first, second);
}

#[test]
fn property_extension_is_stable() {
    assert_eq!(PROPERTIES_EXTENSION, "properties");
}
