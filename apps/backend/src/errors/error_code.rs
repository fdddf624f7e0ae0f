//! Error codes for the campus auth API.
//!
//! Every code that can appear in a Problem Details body is listed here.
//! Codes are SCREAMING_SNAKE_CASE and map 1:1 to the response strings.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No bearer token was supplied
    UnauthorizedMissingToken,
    /// Token verified but its subject is unknown, or the lookup was refused
    UnauthorizedInvalidToken,
    /// Token failed verification (signature, shape, expiry) or the gate hit an unexpected fault
    ForbiddenTokenExpiredOrInvalid,

    // Request Validation
    /// Student ID does not match the institutional format
    InvalidStudentId,
    /// Email is not an institutional address
    InvalidEmail,
    /// Password fails the length policy
    InvalidPassword,
    /// Malformed request body
    BadRequest,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::ForbiddenTokenExpiredOrInvalid => "FORBIDDEN_TOKEN_EXPIRED_OR_INVALID",

            Self::InvalidStudentId => "INVALID_STUDENT_ID",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::BadRequest => "BAD_REQUEST",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// All codes, used to check uniqueness.
    pub const ALL: &'static [ErrorCode] = &[
        Self::UnauthorizedMissingToken,
        Self::UnauthorizedInvalidToken,
        Self::ForbiddenTokenExpiredOrInvalid,
        Self::InvalidStudentId,
        Self::InvalidEmail,
        Self::InvalidPassword,
        Self::BadRequest,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
