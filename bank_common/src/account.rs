use crate::errors::AccountingError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// **A single bank account and its current balance**
///
/// The identity fields are set at construction time and never change
/// afterwards; only the balance is mutable, and only through
/// [`Account::deposit`] and [`Account::withdraw`].
///
/// The balance is never negative: a withdrawal that would overdraw
/// the account is rejected before any mutation happens.
#[derive(Debug, Serialize)]
pub struct Account {
    holder_name: String,
    branch_code: String,
    account_number: String,
    balance: Decimal,
}

impl Account {
    /// Creates a new [`Account`] with the given identity fields and balance.
    ///
    /// The initial balance is assumed to have been validated as
    /// non-negative by the caller (the registration prompts only
    /// accept non-negative amounts).
    pub fn new(
        holder_name: String,
        branch_code: String,
        account_number: String,
        initial_balance: Decimal,
    ) -> Self {
        Account {
            holder_name,
            branch_code,
            account_number,
            balance: initial_balance,
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Retrieves the current balance; no mutation.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposits the `amount` into the account and returns the new balance.
    ///
    /// # Errors
    /// - `amount` is zero or negative, `AccountingError::NonPositiveAmount`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountingError> {
        if amount <= Decimal::ZERO {
            return Err(AccountingError::NonPositiveAmount(amount));
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Withdraws the `amount` from the account and returns the new balance.
    ///
    /// # Errors
    /// - `amount` is zero or negative, `AccountingError::NonPositiveAmount`;
    /// - `amount` exceeds the balance, `AccountingError::InsufficientFunds`.
    ///   The balance is left untouched in both cases.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountingError> {
        if amount <= Decimal::ZERO {
            return Err(AccountingError::NonPositiveAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountingError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Holder:  {}", self.holder_name)?;
        writeln!(f, "Branch:  {}", self.branch_code)?;
        writeln!(f, "Account: {}", self.account_number)?;
        write!(f, "Balance: $ {:.2}", self.balance)
    }
}
