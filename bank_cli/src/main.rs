//! The "Bank Terminal" app's entry point.

use bank_cli::logic::main_loop;

/// The "Bank Terminal" app's entry point.
fn main() {
    env_logger::init();
    main_loop();
}
