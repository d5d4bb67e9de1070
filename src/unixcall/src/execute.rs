use crate::cli::CliOptions;
use anyhow::{anyhow, Context, Result};
use rawunix::{HostValue, UnixModule};

const FIELD_PREFIX: &str = "unix.";

/// Read one command-line word as a host value.
pub fn parse_arg(module: &UnixModule, word: &str) -> Result<HostValue> {
    if let Some(name) = word.strip_prefix(FIELD_PREFIX) {
        return module
            .field(name)
            .cloned()
            .ok_or_else(|| anyhow!("unknown field `{}`", word));
    }
    Ok(match word {
        "nil" => HostValue::Nil,
        "true" => HostValue::Boolean(true),
        "false" => HostValue::Boolean(false),
        _ => {
            if let Ok(i) = word.parse::<i64>() {
                HostValue::Integer(i)
            } else if let Ok(n) = word.parse::<f64>() {
                HostValue::Number(n)
            } else {
                HostValue::from(word)
            }
        }
    })
}

/// Run the call described by `opts` and return its results.
pub fn execute(module: &UnixModule, opts: &CliOptions) -> Result<Vec<HostValue>> {
    let function = opts
        .function()
        .ok_or_else(|| anyhow!("no function given"))?;
    let args = opts
        .raw_args()
        .iter()
        .map(|word| parse_arg(module, word))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("calling {} with {} argument(s)", function, args.len());
    module
        .call(function, &args)
        .with_context(|| format!("call to `{}` failed", function))
}
