//! Short code generation and validation utilities.

use std::sync::LazyLock;

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 7;

/// Accepted code format, for both custom and generated codes.
pub const CODE_PATTERN: &str = r"^[A-Za-z0-9]{6,8}$";

/// Codes that collide with fixed routes and would never reach the redirect.
pub const RESERVED_CODES: &[&str] = &["healthz"];

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(CODE_PATTERN).unwrap());

/// Generates a random 7-character code over `[A-Za-z0-9]`.
///
/// Randomness comes from the thread-local generator; uniqueness is not
/// guaranteed and must be checked against the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` matches `[A-Za-z0-9]{6,8}` exactly.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true if `code` is shadowed by a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 6-8 ASCII letters or digits.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Custom code must match [A-Za-z0-9]{6,8}",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..200 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..200 {
            assert!(validate_code(&generate_code()).is_ok());
        }
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 90);
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_code("abc123").is_ok());
        assert!(validate_code("abc1234").is_ok());
        assert!(validate_code("abc12345").is_ok());

        assert!(validate_code("abc12").is_err());
        assert!(validate_code("abc123456").is_err());
    }

    #[test]
    fn test_validate_mixed_case() {
        assert!(validate_code("AbCdEf12").is_ok());
        assert!(validate_code("ZZZZZZ").is_ok());
    }

    #[test]
    fn test_validate_rejects_symbols() {
        let err = validate_code("my-code").unwrap_err();
        assert!(err.to_string().contains("[A-Za-z0-9]{6,8}"));

        assert!(validate_code("my_code1").is_err());
        assert!(validate_code("abc 123").is_err());
        assert!(validate_code("abc123\n").is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii() {
        assert!(validate_code("абвгде").is_err());
        assert!(validate_code("abcdé1").is_err());
    }

    #[test]
    fn test_reserved_codes_are_well_formed() {
        for &code in RESERVED_CODES {
            assert!(is_valid_code(code), "{code}");
            assert!(is_reserved_code(code));
        }
        assert!(!is_reserved_code("abc123"));
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_code("").is_err());
    }
}
