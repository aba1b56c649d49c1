//! Search input checks.

/// Inputs shorter than this are not judged yet.
pub const MIN_CHECKED_LEN: usize = 2;

/// Verdict on the text currently typed into the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCheck {
    /// Too short to judge.
    Pending,
    Valid,
    /// Contains characters outside the hexadecimal alphabet used by ids.
    Invalid,
}

impl IdCheck {
    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

/// Check a partially typed question id.
pub fn check_question_id(input: &str) -> IdCheck {
    let value = input.trim();
    if value.chars().count() < MIN_CHECKED_LEN {
        IdCheck::Pending
    } else if value.chars().all(|c| c.is_ascii_hexdigit()) {
        IdCheck::Valid
    } else {
        IdCheck::Invalid
    }
}
