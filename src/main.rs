//! Todo Shell - interactive task list manager

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = todo_shell::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
