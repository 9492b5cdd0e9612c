use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod catalog;
pub mod check;
pub mod validate;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON payload against a catalog message shape.
    Validate(ValidateArgs),
    /// List the message catalog, or show one message's shape.
    Catalog(CatalogArgs),
    /// Check a scalar value against a business-rule constraint.
    Check(CheckArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Catalog(args) => catalog::run(args, format),
        Command::Check(args) => check::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog message name (e.g. OneTimeChargeCreateRequest).
    pub message: String,
    /// JSON payload.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the payload from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Show a single message's shape instead of the full listing.
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CheckRule {
    Description,
    DisplayName,
    Sku,
    TaxCode,
    Currency,
    Price,
    Uuid,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint to apply.
    pub rule: CheckRule,
    /// Value to check. Hyphen-leading values (negative prices) are
    /// accepted as-is.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}
