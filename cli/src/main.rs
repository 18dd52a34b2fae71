mod commands;
mod terminal;

use std::process::ExitCode;

use cidrscope_common::config::Config;
use commands::{CommandLine, inspect};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        verbose: commands.verbose,
        no_color: commands.no_color,
    };
    logging::init_logging(&cfg);

    match inspect::inspect(&commands.cidr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            print::usage();
            ExitCode::FAILURE
        }
    }
}
