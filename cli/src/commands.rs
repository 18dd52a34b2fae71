pub mod inspect;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "cidrscope")]
#[command(about = "Break a CIDR block down into masks, bounds and bits.", version)]
pub struct CommandLine {
    /// CIDR to inspect, e.g. 10.20.30.40/22 or 2001:db8::1/64
    pub cidr: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
