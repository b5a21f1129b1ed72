//! dataide CLI.

use clap::Parser;
use dataide_cli::cli::{Cli, Command};
use dataide_cli::commands::{run_charts, run_export, run_generate, run_profile};
use dataide_cli::logging::init_logging;
use dataide_cli::summary::{print_charts, print_export_summary, print_generate_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Generate(args) => run_generate(args).map(|outcome| print_generate_summary(&outcome)),
        Command::Profile(args) => run_profile(args).map(|rendered| println!("{rendered}")),
        Command::Charts(args) => run_charts(args).map(|charts| print_charts(&charts)),
        Command::Export(args) => run_export(args).map(|outcome| print_export_summary(&outcome)),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
