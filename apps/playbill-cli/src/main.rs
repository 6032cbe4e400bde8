//! # playbill
//!
//! ```text
//! playbill [--plays PATH] [--invoices PATH] [--format text|html|json] [--customer NAME]
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    playbill_cli::run()
}
