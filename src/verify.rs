use std::fmt;

/// Outcome of comparing the original text against the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The sequences are element-wise identical, including length.
    Match,
    /// The sequences differ in content or length.
    Mismatch,
    /// Either sequence is empty; there is nothing meaningful to compare.
    Inconclusive,
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Match => write!(f, "match"),
            Verification::Mismatch => write!(f, "mismatch"),
            Verification::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// Compare the original text with the decoded text.
///
/// Pure function for the presentation layer to render. A `Mismatch` is
/// a valid user-visible outcome, not a program error.
///
/// # Examples
///
/// ```
/// use huffcode::verify::{verify, Verification};
///
/// assert_eq!(verify("hello", "hello"), Verification::Match);
/// assert_eq!(verify("hello", "hxllo"), Verification::Mismatch);
/// assert_eq!(verify("", ""), Verification::Inconclusive);
/// ```
pub fn verify(original: &str, decoded: &str) -> Verification {
    if original.is_empty() || decoded.is_empty() {
        Verification::Inconclusive
    } else if original == decoded {
        Verification::Match
    } else {
        Verification::Mismatch
    }
}
