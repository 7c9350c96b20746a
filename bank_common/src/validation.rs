use crate::errors::InputError;
use rust_decimal::Decimal;

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(holder: &str) -> bool {
    !holder.trim().is_empty()
}

/// **Parses a non-negative decimal amount.**
///
/// # Errors
/// - The word is not a number, `InputError::NotANumber`;
/// - The value is below zero, `InputError::NegativeAmount`.
pub fn parse_amount(word: &str) -> Result<Decimal, InputError> {
    let amount = word
        .parse::<Decimal>()
        .map_err(|_| InputError::NotANumber(word.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(InputError::NegativeAmount(amount));
    }

    Ok(amount)
}

/// **Parses an integer menu choice in `[min, max]`.**
///
/// # Errors
/// - The word is not an integer, `InputError::NotANumber`;
/// - The value falls outside the range, `InputError::ChoiceOutOfRange`.
pub fn parse_choice(word: &str, min: i32, max: i32) -> Result<i32, InputError> {
    let choice = word
        .parse::<i32>()
        .map_err(|_| InputError::NotANumber(word.to_string()))?;

    if choice < min || choice > max {
        return Err(InputError::ChoiceOutOfRange { choice, min, max });
    }

    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_passes() {
        assert!(is_valid_name("Alice"));
        assert!(is_valid_name("Maria da Silva"));
    }

    #[test]
    fn empty_name_fails() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn parse_amount_ok() {
        assert_eq!(Ok(Decimal::new(1050, 2)), parse_amount("10.50"));
        assert_eq!(Ok(Decimal::new(100, 0)), parse_amount("100"));
        assert_eq!(Ok(Decimal::ZERO), parse_amount("0"));
    }

    #[test]
    fn parse_amount_err_not_a_number() {
        assert_eq!(
            Err(InputError::NotANumber("abc".to_string())),
            parse_amount("abc")
        );
    }

    #[test]
    fn parse_amount_err_negative() {
        assert_eq!(
            Err(InputError::NegativeAmount(Decimal::new(-1050, 2))),
            parse_amount("-10.50")
        );
    }

    #[test]
    fn parse_choice_ok() {
        assert_eq!(Ok(2), parse_choice("2", 0, 4));
        assert_eq!(Ok(0), parse_choice("0", 0, 4));
        assert_eq!(Ok(4), parse_choice("4", 0, 4));
    }

    #[test]
    fn parse_choice_err_out_of_range() {
        assert_eq!(
            Err(InputError::ChoiceOutOfRange {
                choice: 5,
                min: 0,
                max: 4,
            }),
            parse_choice("5", 0, 4)
        );
        assert_eq!(
            Err(InputError::ChoiceOutOfRange {
                choice: -1,
                min: 0,
                max: 4,
            }),
            parse_choice("-1", 0, 4)
        );
    }

    #[test]
    fn parse_choice_err_not_a_number() {
        assert_eq!(
            Err(InputError::NotANumber("abc".to_string())),
            parse_choice("abc", 0, 4)
        );
        assert_eq!(
            Err(InputError::NotANumber("2.5".to_string())),
            parse_choice("2.5", 0, 4)
        );
    }
}
