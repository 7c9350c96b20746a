/// **Normalizes a branch code or account number for display.**
///
/// Strips all non-digit characters from the raw input:
/// - exactly 4 digits are shaped as a branch code, `DDD-D`;
/// - exactly 6 digits are shaped as an account number, `DDDDD-D`;
/// - any other digit count returns the original input unchanged.
///
/// The permissive fallback is intentional: malformed input is passed
/// through as typed rather than rejected.
pub fn format_account_field(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        4 => format!("{}-{}", &digits[..3], &digits[3..]),
        6 => format!("{}-{}", &digits[..5], &digits[5..]),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_account_field;

    #[test]
    fn four_digits_become_branch_code() {
        assert_eq!("123-4", format_account_field("1234"));
        assert_eq!("000-0", format_account_field("0000"));
    }

    #[test]
    fn six_digits_become_account_number() {
        assert_eq!("12345-6", format_account_field("123456"));
    }

    #[test]
    fn non_digit_characters_are_stripped_before_counting() {
        assert_eq!("123-4", format_account_field("12-34"));
        assert_eq!("123-4", format_account_field(" 1 2 3 4 "));
        assert_eq!("12345-6", format_account_field("123.456"));
    }

    #[test]
    fn other_digit_counts_pass_through_unchanged() {
        assert_eq!("12", format_account_field("12"));
        assert_eq!("1234567", format_account_field("1234567"));
        assert_eq!("branch one", format_account_field("branch one"));
        assert_eq!("", format_account_field(""));
    }
}
