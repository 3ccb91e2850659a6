//! Binary that plays the scripted manor session and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `plan_fixture`
//!
//! Output: key=value lines on stdout (see `lock_tests::manor_script`).
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::process::ExitCode;

use lock_tests::manor_script::{run_manor_script, MANOR_SCRIPT};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("playing {} manor commands", MANOR_SCRIPT.len());

    match run_manor_script() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("plan_fixture: {err}");
            ExitCode::FAILURE
        }
    }
}
