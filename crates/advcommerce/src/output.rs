use std::io::IsTerminal;

use advcommerce_schema::Shape;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct VerdictOutput<'a> {
    message: &'a str,
    valid: bool,
}

pub fn print_verdict(message: &str, valid: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = VerdictOutput { message, valid };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MESSAGE", "VALID"])
                .add_row(vec![message.to_string(), valid.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{message}: {}", if valid { "valid" } else { "invalid" });
        }
    }
}

#[derive(Serialize)]
struct FieldOutput {
    name: &'static str,
    kind: String,
    required: bool,
}

pub fn print_shape(shape: &Shape, format: OutputFormat) {
    let fields: Vec<FieldOutput> = shape
        .fields()
        .iter()
        .map(|field| FieldOutput {
            name: field.name(),
            kind: field.kind().describe(),
            required: field.required(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({ "message": shape.name(), "fields": fields });
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "KIND", "REQUIRED"]);
            for field in &fields {
                table.add_row(vec![
                    field.name.to_string(),
                    field.kind.clone(),
                    field.required.to_string(),
                ]);
            }
            println!("{}", shape.name());
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{}:", shape.name());
            for field in &fields {
                let marker = if field.required { "required" } else { "optional" };
                println!("  {} ({}, {marker})", field.name, field.kind);
            }
        }
    }
}

pub fn print_names(names: &[&'static str], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MESSAGE"]);
            for name in names {
                table.add_row(vec![name.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for name in names {
                println!("{name}");
            }
        }
    }
}
