//! Field validation rules.
//!
//! Each rule is a pure predicate over the raw field value. A field is valid
//! when every rule in its list holds; nothing is trimmed before checking.

use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted address, in bytes.
const MAX_EMAIL_LEN: usize = 254;

/// Longest accepted local part (before `@`), in bytes.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Address grammar: dot-separated atoms, `@`, dot-separated hostname labels.
///
/// Length limits are checked separately in [`is_email`] since the regex
/// crate has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must look like an email address (empty passes; pair with `Required`).
    Email,
}

/// Rules applied to the email field.
pub const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];

/// Rules applied to the password field.
pub const PASSWORD_RULES: &[Rule] = &[Rule::Required];

impl Rule {
    /// Returns true if `value` satisfies this rule.
    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => is_present(value),
            Rule::Email => value.is_empty() || is_email(value),
        }
    }

    /// Short message shown under a field that violates this rule.
    pub fn message(self) -> &'static str {
        match self {
            Rule::Required => "This field is required",
            Rule::Email => "Enter a valid email address",
        }
    }
}

/// Returns true if every rule holds for `value`.
pub fn satisfies_all(rules: &[Rule], value: &str) -> bool {
    rules.iter().all(|rule| rule.check(value))
}

/// Returns the first rule that `value` violates, if any.
pub fn first_violation(rules: &[Rule], value: &str) -> Option<Rule> {
    rules.iter().copied().find(|rule| !rule.check(value))
}

/// Non-empty check. Whitespace counts as content.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Address syntax check. Empty input is rejected here.
pub fn is_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}
