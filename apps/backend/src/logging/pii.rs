use std::fmt;

use lazy_regex::{lazy_regex, Lazy};
use regex::{Captures, Regex};

static EMAIL: Lazy<Regex> = lazy_regex!(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b");
/// Compact JWS: three base64url segments.
static JWT: Lazy<Regex> =
    lazy_regex!(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b");
static OPAQUE_TOKEN: Lazy<Regex> = lazy_regex!(r"\b[A-Za-z0-9+/_-]{24,}={0,2}");

/// Mask emails and credentials before they reach the logs.
///
/// Emails keep the first character of the local part and the full domain.
/// JWTs and long opaque runs (service keys) become `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let masked = EMAIL.replace_all(input, |caps: &Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => full.to_string(),
        }
    });
    let masked = JWT.replace_all(&masked, "[REDACTED_TOKEN]");
    OPAQUE_TOKEN
        .replace_all(&masked, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
