//! The interactive session: account registration and the main menu loop.

use bank_common::account::Account;
use bank_common::cli::constants::*;
use bank_common::cli::helpers::{prompt_amount, prompt_choice, prompt_text};
use bank_common::errors::AccountingError;
use log::{debug, info};

/// **Runs one full terminal session.**
///
/// Registers the account first, then dispatches menu choices until the
/// user picks `0` or the input stream ends. Either way the session ends
/// normally; invalid input never terminates it.
pub fn main_loop() {
    println!("\n=== DIGITAL BANK ===");
    println!("=== ACCOUNT REGISTRATION ===\n");

    let mut account = match register_account() {
        Some(account) => account,
        None => return,
    };

    println!("\n=== ACCOUNT CREATED SUCCESSFULLY! ===");
    println!(
        "Hello {}, thank you for opening an account with our bank!",
        account.holder_name()
    );
    println!("Branch: {}", account.branch_code());
    println!("Account: {}", account.account_number());
    println!("Initial balance: $ {:.2}", account.balance());

    loop {
        print_menu();

        let choice = match prompt_choice(MENU_CHOICE_PROMPT, MENU_MIN, MENU_MAX) {
            Some(choice) => choice,
            None => break,
        };

        match choice {
            1 => check_balance(&account),
            2 => deposit(&mut account),
            3 => withdraw(&mut account),
            4 => display_account(&account),
            // The choice prompt only yields values in [MENU_MIN, MENU_MAX],
            // so the only value left here is 0.
            _ => {
                println!("\nThank you for banking with us. Goodbye!");
                break;
            }
        }
    }
}

/// **Collects the account holder's details and constructs the account.**
///
/// Prompts, in order: holder name, branch code, account number, and the
/// initial balance. The branch code and account number are normalized
/// when the raw input carries exactly 4 or 6 digits, respectively.
///
/// Returns `None` only when the input stream ends during registration.
fn register_account() -> Option<Account> {
    let holder_name = prompt_text(HOLDER_NAME_PROMPT, false)?;
    let branch_code = prompt_text(BRANCH_CODE_PROMPT, true)?;
    let account_number = prompt_text(ACCOUNT_NUMBER_PROMPT, true)?;
    let initial_balance = prompt_amount(INITIAL_BALANCE_PROMPT)?;

    info!(
        "registered account {} at branch {} for {}",
        account_number, branch_code, holder_name
    );

    Some(Account::new(
        holder_name,
        branch_code,
        account_number,
        initial_balance,
    ))
}

/// **Contains all menu options.**
///
/// Wrapped by `print_menu()` so we can unit-test the contents,
/// so that we don't forget to list a newly-added operation.
fn menu_contents() -> String {
    [
        "1 - Check Balance",
        "2 - Make a Deposit",
        "3 - Make a Withdrawal",
        "4 - Display Account Data",
        "0 - Exit",
    ]
    .join("\n")
}

/// **Prints the main menu.**
fn print_menu() {
    println!("\n=== MAIN MENU ===");
    println!("{}", menu_contents());
}

/// **Displays the current balance, formatted to two decimals.**
fn check_balance(account: &Account) {
    println!("\n=== CURRENT BALANCE ===");
    println!("Available balance: $ {:.2}", account.balance());
}

/// **Deposit funds into the account**
///
/// Prompts for the amount, then applies the deposit. A non-positive
/// amount aborts the operation with a message and returns to the menu
/// without re-prompting.
fn deposit(account: &mut Account) {
    let amount = match prompt_amount(DEPOSIT_AMOUNT_PROMPT) {
        Some(amount) => amount,
        None => return,
    };

    match account.deposit(amount) {
        Ok(balance) => {
            debug!(
                "deposited {} into {}; new balance {}",
                amount,
                account.account_number(),
                balance
            );
            println!("\nDeposit of $ {:.2} completed successfully!", amount);
            check_balance(account);
        }
        Err(err) => println!("\n[ERROR] {}", err),
    }
}

/// **Withdraw funds from the account**
///
/// Prompts for the amount, then applies the withdrawal. A non-positive
/// amount aborts the operation with a message; an amount above the
/// balance aborts it with a message and the current balance. Neither
/// case mutates the account or re-prompts.
fn withdraw(account: &mut Account) {
    let amount = match prompt_amount(WITHDRAWAL_AMOUNT_PROMPT) {
        Some(amount) => amount,
        None => return,
    };

    match account.withdraw(amount) {
        Ok(balance) => {
            debug!(
                "withdrew {} from {}; new balance {}",
                amount,
                account.account_number(),
                balance
            );
            println!("\nWithdrawal of $ {:.2} completed successfully!", amount);
            check_balance(account);
        }
        Err(err @ AccountingError::InsufficientFunds { .. }) => {
            println!("\n[ERROR] {}", err);
            check_balance(account);
        }
        Err(err) => println!("\n[ERROR] {}", err),
    }
}

/// **Prints the account's identity fields and its current balance.**
fn display_account(account: &Account) {
    println!("\n=== ACCOUNT DATA ===");
    println!("{}", account);
}

#[cfg(test)]
mod tests {
    use super::menu_contents;
    use bank_common::cli::constants::{MENU_MAX, MENU_MIN};

    #[test]
    fn test_menu_contents() {
        let expected = "1 - Check Balance\n\
                        2 - Make a Deposit\n\
                        3 - Make a Withdrawal\n\
                        4 - Display Account Data\n\
                        0 - Exit"
            .to_string();
        assert_eq!(menu_contents(), expected);
    }

    #[test]
    fn menu_lists_every_choice_in_range() {
        let contents = menu_contents();
        for choice in MENU_MIN..=MENU_MAX {
            assert!(
                contents.contains(&format!("{} - ", choice)),
                "menu is missing option {}",
                choice
            );
        }
        assert_eq!((MENU_MAX - MENU_MIN + 1) as usize, contents.lines().count());
    }
}
