use std::io;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use vaultplan::console;
use vaultplan_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init_with_directive(console::directive_for_verbosity(cli.verbose));

    match run(&cli, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
