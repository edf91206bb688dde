use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Tabled, Debug, PartialEq)]
struct FieldRow {
    #[tabled(rename = "#")]
    item: usize,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn print_value(value: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
    }
}

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_table(value: &Value) {
    let rows = build_field_rows(value);
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    println!("{}", Table::new(rows));
}

/// Flattens a response into one row per field. Arrays yield one item per
/// element; nested values are rendered as compact JSON.
fn build_field_rows(value: &Value) -> Vec<FieldRow> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    };

    let mut rows = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(fields) => {
                for (field, v) in fields {
                    rows.push(FieldRow {
                        item: index + 1,
                        field: field.clone(),
                        value: format_cell(v),
                    });
                }
            }
            scalar => rows.push(FieldRow {
                item: index + 1,
                field: String::new(),
                value: format_cell(scalar),
            }),
        }
    }
    rows
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
