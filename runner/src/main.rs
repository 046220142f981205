//! `sonar-runner`: resolve analysis properties from the command line and run
//! them through a launcher.
//!
//! The bundled launcher prints the final property set to stdout; the encoding
//! decision is logged to stderr.

use anyhow::Result;
use clap::Parser;

use sonar_runner::cli::Cli;
use sonar_runner::exit_codes;
use sonar_runner::launcher::PrintLauncher;
use sonar_runner::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let launcher = PrintLauncher::new(stdout.lock(), cli.print_format());
    let mut runner = cli.build_runner(launcher)?;
    runner.execute()
}
