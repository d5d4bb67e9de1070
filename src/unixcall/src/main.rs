mod cli;
mod execute;

use crate::{cli::CliOptions, execute::execute};
use clap::Parser;
use rawunix::init::{rawunix_shutdown, rawunix_start};

/// Entry point of the unixcall executable.
///
///     unixcall [-v...] function arg1 arg2 ...
///
/// Each result of the call is printed on its own line. A host error (unknown
/// function, bad argument) is reported on stderr with a non-zero exit status.
fn main() -> anyhow::Result<()> {
    let opts = CliOptions::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level())
        .parse_default_env()
        .init();

    let module = rawunix_start(opts.verbose as isize);

    if opts.list {
        for name in module.function_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let results = execute(&module, &opts);
    rawunix_shutdown();
    for value in results? {
        println!("{}", value);
    }
    Ok(())
}
