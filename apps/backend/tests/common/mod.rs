#![allow(dead_code)]

// tests/common/mod.rs

pub use auth_test_support::problem_details::assert_problem_details_from_service_response as assert_problem;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    auth_test_support::logging::init();
}
