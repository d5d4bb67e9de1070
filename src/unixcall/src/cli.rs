use clap::*;

#[derive(Debug, Parser, Clone)]
#[command(name = "unixcall", about = "Call one function of the unix module")]
pub struct CliOptions {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the exported function names and exit
    #[arg(long)]
    pub list: bool,

    /// Function to call, followed by its arguments
    ///
    /// Arguments are read as nil, true, false, integers and floats where they
    /// parse as such, and as strings otherwise. `unix.NAME` refers to a
    /// published field, e.g. `unix.SIGTERM` or `unix.SIG_IGN`.
    ///
    /// Example:
    ///   unixcall chmod notes.txt 420
    #[arg(value_name = "FUNCTION", num_args = 1.., trailing_var_arg = true, required_unless_present = "list")]
    pub call: Vec<String>,
}

impl CliOptions {
    pub fn function(&self) -> Option<&str> {
        self.call.first().map(String::as_str)
    }

    pub fn raw_args(&self) -> &[String] {
        self.call.get(1..).unwrap_or(&[])
    }

    /// Log filter for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_and_arguments_split() {
        let opts = CliOptions::parse_from(["unixcall", "-vv", "kill", "0", "unix.SIGTERM"]);
        assert_eq!(opts.verbose, 2);
        assert_eq!(opts.function(), Some("kill"));
        assert_eq!(opts.raw_args(), ["0", "unix.SIGTERM"]);
        assert_eq!(opts.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn negative_numbers_are_arguments() {
        let opts = CliOptions::parse_from(["unixcall", "chown", "f", "-1", "-1"]);
        assert_eq!(opts.raw_args(), ["f", "-1", "-1"]);
    }

    #[test]
    fn list_needs_no_function() {
        let opts = CliOptions::parse_from(["unixcall", "--list"]);
        assert!(opts.list);
        assert_eq!(opts.function(), None);
        assert!(CliOptions::try_parse_from(["unixcall"]).is_err());
    }
}
