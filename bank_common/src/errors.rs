use rust_decimal::Decimal;
use thiserror::Error;

/// **An application-specific error type for account operations**
#[derive(Debug, Error, PartialEq)]
pub enum AccountingError {
    #[error("The transaction amount must be positive; you provided {0}.")]
    NonPositiveAmount(Decimal),

    #[error(
        "Insufficient funds: tried to withdraw {requested:.2}, \
         but only {available:.2} is available."
    )]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

/// **Errors for raw terminal input**
///
/// Every variant is recovered locally by re-prompting;
/// none of them ever reaches the process level.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("This field cannot be empty.")]
    EmptyField,

    #[error("A numeric value is required; you provided '{0}'.")]
    NotANumber(String),

    #[error("The value cannot be negative; you provided {0}.")]
    NegativeAmount(Decimal),

    #[error("Enter a number between {min} and {max}; you provided {choice}.")]
    ChoiceOutOfRange { choice: i32, min: i32, max: i32 },
}
