//! GoMarketplace cart CLI

use std::process::ExitCode;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;

/// GoMarketplace cart CLI entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let cli = Cli::load();

    if let Err(init_error) = observability::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for init errors"
        )]
        {
            eprintln!("{init_error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(output) => {
            #[expect(clippy::print_stdout, reason = "command output is the CLI's result")]
            {
                println!("{output}");
            }

            ExitCode::SUCCESS
        }
        Err(command_error) => {
            #[expect(clippy::print_stderr, reason = "command failures are reported to the user")]
            {
                eprintln!("{command_error}");
            }

            ExitCode::FAILURE
        }
    }
}
