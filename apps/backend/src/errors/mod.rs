//! Error handling for the campus auth backend.

pub mod error_code;

pub use error_code::ErrorCode;
