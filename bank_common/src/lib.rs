pub mod account;
pub mod cli;
pub mod errors;
pub mod format;
pub mod validation;

pub use account::Account;
