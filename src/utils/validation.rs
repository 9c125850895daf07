// Project name validation rules

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_-]*$").expect("charset pattern is valid"));

/// A single violated naming rule, with a diagnostic suitable for showing
/// to an interactive user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("name cannot start with a digit")]
    StartsWithDigit,

    #[error("name cannot contain spaces")]
    ContainsSpace,

    #[error("name can only contain letters, digits, '-' and '_'")]
    IllegalCharacter,

    #[error("name cannot start with '-' or '_'")]
    LeadingSeparator,

    #[error("name cannot end with '-' or '_'")]
    TrailingSeparator,
}

/// Check a candidate project name against the naming rules.
///
/// Rules are checked in a fixed precedence order and the first failing
/// rule wins:
/// 1. first character is a decimal digit
/// 2. contains a space anywhere
/// 3. contains a character outside `[A-Za-z0-9_-]`
/// 4. starts with `-` or `_`
/// 5. ends with `-` or `_`
pub fn check_project_name(name: &str) -> std::result::Result<(), NameViolation> {
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(NameViolation::StartsWithDigit);
    }

    if name.contains(' ') {
        return Err(NameViolation::ContainsSpace);
    }

    if !NAME_CHARSET.is_match(name) {
        return Err(NameViolation::IllegalCharacter);
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err(NameViolation::LeadingSeparator);
    }

    if name.ends_with('-') || name.ends_with('_') {
        return Err(NameViolation::TrailingSeparator);
    }

    Ok(())
}

/// Boolean form of [`check_project_name`] for callers that do not care
/// which rule failed.
pub fn is_valid_project_name(name: &str) -> bool {
    check_project_name(name).is_ok()
}
