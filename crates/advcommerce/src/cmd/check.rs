use advcommerce_schema::constraint;

use crate::cmd::{CheckArgs, CheckRule};
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_verdict, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let label = rule_label(args.rule);
    let outcome = apply(args.rule, &args.value)?;

    match outcome {
        Ok(()) => {
            print_verdict(label, true, format);
            Ok(SUCCESS)
        }
        Err(err) => {
            tracing::info!(rule = label, %err, "constraint violated");
            print_verdict(label, false, format);
            Ok(DATA_INVALID)
        }
    }
}

fn rule_label(rule: CheckRule) -> &'static str {
    match rule {
        CheckRule::Description => "description",
        CheckRule::DisplayName => "display-name",
        CheckRule::Sku => "sku",
        CheckRule::TaxCode => "tax-code",
        CheckRule::Currency => "currency",
        CheckRule::Price => "price",
        CheckRule::Uuid => "uuid",
    }
}

/// Outer error is a usage problem (the value could not even be parsed
/// for the rule); inner error is a constraint violation.
fn apply(
    rule: CheckRule,
    value: &str,
) -> CliResult<Result<(), advcommerce_schema::ConstraintError>> {
    let outcome = match rule {
        CheckRule::Description => constraint::check_description(value).map(|_| ()),
        CheckRule::DisplayName => constraint::check_display_name(value).map(|_| ()),
        CheckRule::Sku => constraint::check_sku(value).map(|_| ()),
        CheckRule::TaxCode => constraint::check_tax_code(value).map(|_| ()),
        CheckRule::Currency => constraint::check_currency(value).map(|_| ()),
        CheckRule::Price => {
            let price: i64 = value
                .parse()
                .map_err(|_| CliError::new(USAGE, format!("price is not an integer: {value}")))?;
            constraint::check_price(price).map(|_| ())
        }
        CheckRule::Uuid => constraint::check_uuid(value).map(|_| ()),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parse_failure_is_usage() {
        let err = apply(CheckRule::Price, "ten").expect_err("not an integer");
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn violations_are_inner_errors() {
        assert!(apply(CheckRule::Currency, "us").unwrap().is_err());
        assert!(apply(CheckRule::Price, "-1").unwrap().is_err());
        assert!(apply(CheckRule::Sku, "com.example.pro").unwrap().is_ok());
    }
}
