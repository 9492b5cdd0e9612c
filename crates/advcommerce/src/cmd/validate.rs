use std::io::Read;

use advcommerce_models::Catalog;
use serde_json::Value;

use crate::cmd::ValidateArgs;
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_verdict, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let raw = read_payload(&args)?;
    let payload: Value = serde_json::from_str(&raw)
        .map_err(|err| CliError::new(DATA_INVALID, format!("payload is not JSON: {err}")))?;

    let catalog = Catalog::builtin();
    let valid = catalog
        .validate(&args.message, &payload)
        .map_err(|err| CliError::new(USAGE, err.to_string()))?;

    if !valid {
        tracing::info!(message = %args.message, "payload rejected");
    }

    print_verdict(&args.message, valid, format);
    Ok(if valid { SUCCESS } else { DATA_INVALID })
}

fn read_payload(args: &ValidateArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("read {}", path.display()), err));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| io_error("read stdin", err))?;
    Ok(buffer)
}
