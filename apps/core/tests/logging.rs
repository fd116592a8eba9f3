//! Global subscriber setup. Kept in its own test binary so the installed
//! subscriber does not reach the unit tests.

use strokeassist_core::logging::init_tracing;

#[test]
fn test_init_tracing_installs_once() {
    init_tracing("strokeassist-test").unwrap();
    tracing::info!(topic = "fast", "subscriber is live");

    let second = init_tracing("strokeassist-test");
    assert!(second.is_err(), "a second global subscriber must be rejected");
}
