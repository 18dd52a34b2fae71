use colored::*;

pub const USAGE: &str = "specify a CIDR e.g. 10.20.30.40/22";

/// Usage hint shown on stderr when the input cannot be inspected.
pub fn usage() {
    eprintln!("{}", USAGE.yellow());
}
