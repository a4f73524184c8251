//! # Shopfront Console Entry Point
//!
//! ```text
//! main.rs ────► shopfront_console::run()
//!                 ├── config + tracing
//!                 ├── seed catalog
//!                 └── Session::run on stdin/stdout
//! ```
//!
//! Operator mistakes and bad configuration never change the exit code; only
//! a failed read/write exits non-zero.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shopfront_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Session aborted");
            ExitCode::FAILURE
        }
    }
}
