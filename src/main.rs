use devtrack::commands::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    Cli::menu()
}
