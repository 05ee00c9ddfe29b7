//! Result rendering: JSON by default, an ASCII table for terminal reading.

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{rendered}");
        }
        OutputFormat::Table => render_table(value),
    }
    Ok(())
}

fn render_table(value: &Value) {
    match value {
        Value::Array(rows) => render_rows(rows),
        Value::Object(map) => {
            for (key, field) in map {
                println!("{key}: {}", cell(field));
            }
        }
        other => println!("{}", cell(other)),
    }
}

fn render_rows(rows: &[Value]) {
    let columns = column_names(rows);
    if columns.is_empty() {
        println!("(empty)");
        return;
    }

    let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
    let mut rendered_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| row.get(column).map(cell).unwrap_or_default())
            .collect();
        for (index, text) in cells.iter().enumerate() {
            if text.len() > widths[index] {
                widths[index] = text.len();
            }
        }
        rendered_rows.push(cells);
    }

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{column:<width$}"))
        .collect();
    println!("{}", header.join("  "));

    for cells in rendered_rows {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(text, &width)| format!("{text:<width$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// Column order: union of row keys, first-seen order.
fn column_names(rows: &[Value]) -> Vec<String> {
    let mut columns = Vec::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                if !columns.iter().any(|existing| existing == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
