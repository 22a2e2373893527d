//! Word validation for submitted words
//!
//! Duel players type the secret word for their opponent. A submission is
//! accepted when it:
//! - Contains at least one letter
//! - Uses only ASCII letters and spaces

/// Result of word validation with specific error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word is empty or only spaces
    Empty,
    /// Word contains characters other than letters and spaces
    InvalidCharacters { offending: Vec<char> },
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly error message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::Empty => "Word is required".to_string(),
            ValidationResult::InvalidCharacters { .. } => {
                "Only letters and spaces allowed".to_string()
            }
        }
    }
}

/// Accepts or rejects candidate words before they reach the engine
pub trait WordValidator {
    fn check(&self, candidate: &str) -> ValidationResult;

    fn is_acceptable(&self, candidate: &str) -> bool {
        self.check(candidate).is_valid()
    }
}

/// Letters-and-spaces validator used for duel submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterValidator;

impl WordValidator for LetterValidator {
    fn check(&self, candidate: &str) -> ValidationResult {
        validate_word(candidate)
    }
}

/// Validate a submitted word
///
/// Checks in order:
/// 1. At least one non-space character
/// 2. Only ASCII letters and spaces
pub fn validate_word(word: &str) -> ValidationResult {
    if word.chars().all(|c| c == ' ') {
        return ValidationResult::Empty;
    }

    let mut offending: Vec<char> = Vec::new();
    for c in word.chars() {
        if !(c.is_ascii_alphabetic() || c == ' ') && !offending.contains(&c) {
            offending.push(c);
        }
    }

    if offending.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::InvalidCharacters { offending }
    }
}
