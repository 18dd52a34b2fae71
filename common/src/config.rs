pub struct Config {
    /// Verbosity requested on the command line (`-v`, `-vv`, `-vvv`).
    ///
    /// Only affects diagnostics on stderr, never the report itself.
    pub verbose: u8,
    /// Disables ANSI colors in log output.
    pub no_color: bool,
}

impl Config {
    /// Default `tracing` level directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
