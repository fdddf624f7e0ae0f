//! Institutional input validators.
//!
//! Student IDs are eight digits whose first two digits name the enrolment
//! year. Only the years listed in [`STUDENT_ID_YEAR_PREFIXES`] are accepted;
//! this is an enumerated deployment window, not a numeric range, so a later
//! cohort ("26...") is rejected until the list is extended.

use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Enrolment-year prefixes accepted for student IDs and school emails.
pub const STUDENT_ID_YEAR_PREFIXES: [&str; 7] = ["19", "20", "21", "22", "23", "24", "25"];

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 50;

pub const PASSWORD_TOO_SHORT: &str = "密码长度至少为6位";
pub const PASSWORD_TOO_LONG: &str = "密码长度不能超过50位";

/// `true` iff `value` is an eight-digit student ID with an accepted year prefix.
pub fn is_valid_student_id(value: &str) -> bool {
    regex_is_match!(r"^(?:19|20|21|22|23|24|25)[0-9]{6}$", value)
}

/// `true` iff `value` is `<student id>@fudan.edu.cn` or `<student id>@m.fudan.edu.cn`.
pub fn is_valid_school_email(value: &str) -> bool {
    regex_is_match!(
        r"^(?:19|20|21|22|23|24|25)[0-9]{6}@(?:m\.)?fudan\.edu\.cn$",
        value
    )
}

/// Outcome of the password length policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Length-only password policy: 6 to 50 characters inclusive.
///
/// Length is counted in Unicode scalar values, not UTF-16 code units, so an
/// astral character such as an emoji counts once. "😀😀😀" is three
/// characters long and too short, although a UTF-16 count would give six.
pub fn validate_password(password: &str) -> PasswordCheck {
    let len = password.chars().count();
    let message = if len < PASSWORD_MIN_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else if len > PASSWORD_MAX_LEN {
        Some(PASSWORD_TOO_LONG)
    } else {
        None
    };

    PasswordCheck {
        valid: message.is_none(),
        message,
    }
}

/// Fields a signup form submits for pre-validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationInput {
    pub student_id: String,
    pub email: String,
    pub password: String,
}

/// Per-field results returned to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub student_id: bool,
    pub email: bool,
    pub password: PasswordCheck,
}

impl RegistrationReport {
    pub fn is_valid(&self) -> bool {
        self.student_id && self.email && self.password.valid
    }

    /// First failing field as an error, checked in form order.
    pub fn into_result(self) -> Result<Self, AppError> {
        if !self.student_id {
            return Err(AppError::invalid(
                ErrorCode::InvalidStudentId,
                "Student ID must be 8 digits starting with an enrolment year",
            ));
        }
        if !self.email {
            return Err(AppError::invalid(
                ErrorCode::InvalidEmail,
                "Email must be a student address at fudan.edu.cn or m.fudan.edu.cn",
            ));
        }
        if let Some(message) = self.password.message {
            return Err(AppError::invalid(ErrorCode::InvalidPassword, message));
        }
        Ok(self)
    }
}

pub fn check_registration(input: &RegistrationInput) -> RegistrationReport {
    RegistrationReport {
        student_id: is_valid_student_id(&input.student_id),
        email: is_valid_school_email(&input.email),
        password: validate_password(&input.password),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn student_id_examples() {
        assert!(is_valid_student_id("20123456"));
        assert!(is_valid_student_id("19000000"));
        assert!(is_valid_student_id("25999999"));
        assert!(!is_valid_student_id("26123456"));
        assert!(!is_valid_student_id("18123456"));
        assert!(!is_valid_student_id("2012345"));
        assert!(!is_valid_student_id("201234567"));
        assert!(!is_valid_student_id("2012345a"));
        assert!(!is_valid_student_id(""));
    }

    #[test]
    fn student_id_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not student IDs.
        assert!(!is_valid_student_id("20١٢٣٤٥٦"));
    }

    #[test]
    fn regex_agrees_with_prefix_list() {
        for year in 0..100 {
            let id = format!("{year:02}123456");
            let listed = STUDENT_ID_YEAR_PREFIXES.contains(&&id[..2]);
            assert_eq!(is_valid_student_id(&id), listed, "prefix {year:02}");
            let email = format!("{id}@fudan.edu.cn");
            assert_eq!(is_valid_school_email(&email), listed, "prefix {year:02}");
        }
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_school_email("20123456@fudan.edu.cn"));
        assert!(is_valid_school_email("20123456@m.fudan.edu.cn"));
        assert!(!is_valid_school_email("20123456@gmail.com"));
        assert!(!is_valid_school_email("26123456@fudan.edu.cn"));
        assert!(!is_valid_school_email("2012345@fudan.edu.cn"));
        assert!(!is_valid_school_email("20123456@fudanXeduXcn"));
        assert!(!is_valid_school_email("20123456@x.fudan.edu.cn"));
        assert!(!is_valid_school_email("20123456@fudan.edu.cn.evil.com"));
        assert!(!is_valid_school_email(" 20123456@fudan.edu.cn"));
    }

    #[test]
    fn password_boundaries() {
        assert_eq!(
            validate_password("12345"),
            PasswordCheck {
                valid: false,
                message: Some("密码长度至少为6位")
            }
        );
        assert_eq!(
            validate_password("123456"),
            PasswordCheck {
                valid: true,
                message: None
            }
        );
        assert!(validate_password(&"x".repeat(50)).valid);
        assert_eq!(
            validate_password(&"x".repeat(51)),
            PasswordCheck {
                valid: false,
                message: Some("密码长度不能超过50位")
            }
        );
    }

    #[test]
    fn password_counts_characters_not_bytes() {
        // Six CJK characters are 18 bytes but still six characters.
        assert!(validate_password("密码密码密码").valid);
    }

    #[test]
    fn password_counts_scalar_values_not_utf16_units() {
        let check = validate_password("😀😀😀");
        assert!(!check.valid);
        assert_eq!(check.message, Some(PASSWORD_TOO_SHORT));
        assert!(validate_password("😀😀😀😀😀😀").valid);
    }

    #[test]
    fn password_check_serializes_without_message_when_valid() {
        let json = serde_json::to_value(validate_password("abcdef")).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn registration_reports_first_failure() {
        let input = RegistrationInput {
            student_id: "20123456".into(),
            email: "20123456@gmail.com".into(),
            password: "123".into(),
        };
        let report = check_registration(&input);
        assert!(!report.is_valid());
        let err = report.into_result().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidEmail);
    }

    #[test]
    fn registration_passes() {
        let input = RegistrationInput {
            student_id: "22000001".into(),
            email: "22000001@m.fudan.edu.cn".into(),
            password: "hunter22".into(),
        };
        assert!(check_registration(&input).into_result().is_ok());
    }

    proptest! {
        #[test]
        fn listed_prefix_with_six_digits_is_accepted(
            prefix in prop::sample::select(STUDENT_ID_YEAR_PREFIXES.to_vec()),
            rest in "[0-9]{6}",
        ) {
            let id = format!("{prefix}{rest}");
            prop_assert!(is_valid_student_id(&id));
            let fudan_email = format!("{id}@fudan.edu.cn");
            let mobile_email = format!("{id}@m.fudan.edu.cn");
            prop_assert!(is_valid_school_email(&fudan_email));
            prop_assert!(is_valid_school_email(&mobile_email));
        }

        #[test]
        fn wrong_length_is_rejected(digits in "[0-9]{0,7}|[0-9]{9,12}") {
            prop_assert!(!is_valid_student_id(&digits));
        }

        #[test]
        fn password_validity_tracks_length(len in 0usize..80) {
            let check = validate_password(&"a".repeat(len));
            prop_assert_eq!(check.valid, (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len));
        }
    }
}
