use advcommerce_models::Catalog;

use crate::cmd::CatalogArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_names, print_shape, OutputFormat};

pub fn run(args: CatalogArgs, format: OutputFormat) -> CliResult<i32> {
    let catalog = Catalog::builtin();

    match args.message {
        Some(name) => {
            let shape = catalog
                .get(&name)
                .ok_or_else(|| CliError::new(USAGE, format!("no message named {name:?}")))?;
            print_shape(shape, format);
        }
        None => print_names(&catalog.names(), format),
    }

    Ok(SUCCESS)
}
