//! Field checks for driver records.
//!
//! Patterns compile once per process and are shared by every call.

use std::sync::OnceLock;

use regex::Regex;

use super::{Driver, LicenseClass};
use crate::domain::Violations;

/// Minimum number of characters for given and family names.
pub const DRIVER_NAME_MIN: usize = 3;

// RFC 5322 mailbox building blocks. Non-ASCII text counts as atext.
const ATEXT: &str = r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]|[^\x00-\x7F])";
const QUOTED_PAIR_OR_QTEXT: &str = r#"(?:[^"\\\r\n]|\\[^\r\n])"#;
const COMMENT: &str = r"\((?:[^()\\\r\n]|\\[^\r\n])*\)";
const WSP: &str = r"[ \t]";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static LICENSE_RE: OnceLock<Regex> = OnceLock::new();

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("{name} regex failed to compile: {error}"))
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local parts may be quoted, or dotted atoms where stray dots are
        // tolerated. Domains are strict dot-atoms.
        let local = format!(r#"(?:(?:{ATEXT}|\.)+|"{QUOTED_PAIR_OR_QTEXT}+")"#);
        let domain = format!(r"{ATEXT}+(?:\.{ATEXT}+)*");
        let addr = format!("{local}@{domain}");
        // Display-name words: dotted atoms or quoted strings, never specials.
        let word = format!(r#"(?:(?:{ATEXT}|\.)+|"{QUOTED_PAIR_OR_QTEXT}*")"#);
        let phrase = format!("{word}(?:{WSP}*{word})*");
        let pattern = format!(
            r"^{WSP}*(?:{addr}|(?:{phrase})?{WSP}*<{WSP}*{addr}{WSP}*>)(?:{WSP}|{COMMENT})*$"
        );
        compile("email", &pattern)
    })
}

fn phone_regex() -> &'static Regex {
    // Anchored at the end only: any text ending in ten digits passes.
    PHONE_RE.get_or_init(|| compile("phone", r"((\+|\(|0)?[0-9]{1,3})?(\s|\)|-)?([0-9]{10})$"))
}

fn license_regex() -> &'static Regex {
    LICENSE_RE.get_or_init(|| compile("license", "^[a-zA-Z0-9]{6,11}$"))
}

fn too_short(value: &str) -> bool {
    value.chars().count() < DRIVER_NAME_MIN
}

impl Driver {
    /// Run every field check and collect the failures in field order:
    /// name, last name, email, phone, licence, licence class.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new();
        violations.check(too_short(&self.name), "driver name is invalid");
        violations.check(too_short(&self.last_name), "driver last name is invalid");
        violations.check(
            !email_regex().is_match(&self.email),
            "driver email is invalid",
        );
        violations.check(!phone_regex().is_match(&self.phone), "driver phone is invalid");
        violations.check(
            !license_regex().is_match(&self.license),
            "driver license is invalid",
        );
        violations.check(
            self.license_type.parse::<LicenseClass>().is_err(),
            "driver license type is invalid",
        );
        violations
    }

    /// Validate the record, failing with every violated check.
    pub fn validate(&self) -> Result<(), Violations> {
        self.violations().into_result()
    }
}
