/// Prompt labels

pub const HOLDER_NAME_PROMPT: &str = "Account holder name: ";
pub const BRANCH_CODE_PROMPT: &str = "Branch code (format 000-0): ";
pub const ACCOUNT_NUMBER_PROMPT: &str = "Account number (format 00000-0): ";
pub const INITIAL_BALANCE_PROMPT: &str = "Initial balance: $ ";
pub const DEPOSIT_AMOUNT_PROMPT: &str = "Deposit amount: $ ";
pub const WITHDRAWAL_AMOUNT_PROMPT: &str = "Withdrawal amount: $ ";
pub const MENU_CHOICE_PROMPT: &str = "Choose an option: ";

/// Menu bounds

pub const MENU_MIN: i32 = 0;
pub const MENU_MAX: i32 = 4;
