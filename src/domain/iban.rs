//! IBAN computation
//!
//! Mod-97 check digits over `country + bank + account`.
//!
//! The assembled string is `country + check digits + country + bank +
//! account`: the country code is kept inside the checked body, so the
//! result does not follow the ISO 13616 layout. Downstream reconciliation
//! matches on this exact form.

use super::error::DomainError;

const IBAN_MODULUS: u32 = 97;
const CHECK_BASE: u32 = 98;

/// Compute the check number (`98 - remainder`) for the concatenated input.
pub fn iban_check_digits(
    country_code: &str,
    bank_code: &str,
    account_number: &str,
) -> Result<u32, DomainError> {
    let body = iban_body(country_code, bank_code, account_number);
    let numeric = to_numeric(&body)?;
    Ok(CHECK_BASE - mod97(&numeric))
}

/// Build the IBAN string for an account.
///
/// # Errors
/// - `DomainError::EmptyIbanInput` if all inputs are empty (after removing spaces)
/// - `DomainError::InvalidIbanCharacter` for anything outside `0-9` and `A-Z`
pub fn compute_iban(
    country_code: &str,
    bank_code: &str,
    account_number: &str,
) -> Result<String, DomainError> {
    let body = iban_body(country_code, bank_code, account_number);
    let numeric = to_numeric(&body)?;
    let check = CHECK_BASE - mod97(&numeric);

    Ok(format!("{}{:02}{}", country_code, check, body))
}

fn iban_body(country_code: &str, bank_code: &str, account_number: &str) -> String {
    [country_code, bank_code, account_number]
        .concat()
        .chars()
        .filter(|c| *c != ' ')
        .collect()
}

/// Digits are kept, letters become `A = 10` .. `Z = 35`.
fn to_numeric(body: &str) -> Result<Vec<u32>, DomainError> {
    if body.is_empty() {
        return Err(DomainError::EmptyIbanInput);
    }

    let mut digits = Vec::with_capacity(body.len() * 2);
    for (position, c) in body.chars().enumerate() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            'A'..='Z' => {
                let value = c as u32 - 55;
                digits.push(value / 10);
                digits.push(value % 10);
            }
            _ => return Err(DomainError::invalid_iban_character(c, position)),
        }
    }
    Ok(digits)
}

/// Streaming remainder; the first digit seeds the remainder.
fn mod97(digits: &[u32]) -> u32 {
    let mut iter = digits.iter();
    let mut remainder = iter.next().copied().unwrap_or(0);
    for digit in iter {
        remainder = (remainder * 10 + digit) % IBAN_MODULUS;
    }
    remainder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        // "FR1234500006789" -> 15271234500006789 mod 97 = 81, check = 17
        assert_eq!(iban_check_digits("FR", "12345", "00006789").unwrap(), 17);
        assert_eq!(
            compute_iban("FR", "12345", "00006789").unwrap(),
            "FR17FR1234500006789"
        );
    }

    #[test]
    fn test_spaces_are_stripped() {
        assert_eq!(
            compute_iban("FR", "123 45", "0000 6789").unwrap(),
            "FR17FR1234500006789"
        );
    }

    #[test]
    fn test_check_digits_zero_padded() {
        // "FR0023" -> remainder 89, check 9
        assert_eq!(iban_check_digits("FR", "00", "23").unwrap(), 9);
        assert_eq!(compute_iban("FR", "00", "23").unwrap(), "FR09FR0023");
    }

    #[test]
    fn test_check_digits_high_end() {
        // "CM1000512345678901" -> remainder 1, check 97
        assert_eq!(
            compute_iban("CM", "10005", "12345678901").unwrap(),
            "CM97CM1000512345678901"
        );
    }

    #[test]
    fn test_letter_substitution() {
        assert_eq!(to_numeric("A9Z").unwrap(), vec![1, 0, 9, 3, 5]);
    }

    #[test]
    fn test_mod97_matches_integer_arithmetic() {
        let digits = to_numeric("15271234500006789").unwrap();
        assert_eq!(mod97(&digits), (15271234500006789u64 % 97) as u32);
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = compute_iban("FR", "12-45", "1").unwrap_err();
        assert_eq!(err, DomainError::invalid_iban_character('-', 4));

        let err = compute_iban("fr", "12345", "1").unwrap_err();
        assert_eq!(err, DomainError::invalid_iban_character('f', 0));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(compute_iban("", " ", "").unwrap_err(), DomainError::EmptyIbanInput);
    }
}
