//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-character alphanumeric alphabet using
//! the operating system's secure random source. A predictable generator would
//! let anyone enumerate live links.

use crate::error::AppError;

/// Characters a generated short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of codes issued by the service.
pub const CODE_LENGTH: usize = 6;

/// Largest multiple of the alphabet size that fits in a byte (62 * 4).
/// Bytes at or above it are rejected so every character stays equally likely.
const REJECTION_BOUND: u8 = 248;

/// Generates a random short code of exactly `length` characters.
///
/// # Errors
///
/// Returns [`AppError::Generation`] if `length` is zero or the system random
/// source fails. Callers must not retry on this error.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    if length == 0 {
        return Err(AppError::Generation(
            "code length must be positive".to_string(),
        ));
    }

    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer)
            .map_err(|e| AppError::Generation(format!("secure random source failed: {e}")))?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
            if code.len() == length {
                break;
            }
            code.push(ALPHABET[(byte % 62) as usize] as char);
        }
    }

    Ok(code)
}

/// Checks that a code from a request path is within the accepted bounds.
///
/// Lookups never fail on unusual characters; anything not in the store is
/// simply not found. Only the length is bounded.
pub fn is_valid_code_param(code: &str) -> bool {
    !code.is_empty() && code.chars().count() <= 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 2, 6, 10, 32, 100] {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = generate_code(CODE_LENGTH).unwrap();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_rejects_zero_length() {
        let result = generate_code(0);
        assert!(matches!(result, Err(AppError::Generation(_))));
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(CODE_LENGTH).unwrap())
            .collect();

        // 62^6 possibilities; a duplicate in 1000 draws is vanishingly rare.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let mut seen: HashMap<char, usize> = HashMap::new();
        for c in generate_code(62 * 200).unwrap().chars() {
            *seen.entry(c).or_default() += 1;
        }

        assert_eq!(seen.len(), 62);
        assert!(seen.values().all(|&n| n > 50));
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET.len());
    }

    #[test]
    fn test_is_valid_code_param() {
        assert!(is_valid_code_param("a"));
        assert!(is_valid_code_param("abc123"));
        assert!(is_valid_code_param("abcdefghij"));
        assert!(!is_valid_code_param(""));
        assert!(!is_valid_code_param("abcdefghijk"));
    }
}
