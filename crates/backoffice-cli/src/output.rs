//! Table and JSON output formatting for CLI commands.

use backoffice_core::types::Page;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows in the selected format
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No data.");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print the page position under a table
pub fn print_page_footer<T>(page: &Page<T>, shown: usize, format: OutputFormat) {
    if format == OutputFormat::Table {
        let mut nav = Vec::new();
        if page.has_previous_page() {
            nav.push("previous");
        }
        if page.has_next_page() {
            nav.push("next");
        }
        println!(
            "Page {} of {} ({} shown, {} total){}",
            page.current_page,
            page.total_pages,
            shown,
            page.total_count,
            if nav.is_empty() {
                String::new()
            } else {
                format!(" [{}]", nav.join(" | "))
            },
        );
    }
}

/// Print a single record in the selected format
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    let value = serde_json::to_value(item).unwrap_or_default();
    match format {
        OutputFormat::Table => print_fields(&value, 0),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

fn print_fields(value: &serde_json::Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            for (key, field) in map {
                match field {
                    serde_json::Value::Object(_) => {
                        println!("{pad}  {key}:");
                        print_fields(field, indent + 2);
                    }
                    serde_json::Value::Array(items) if items.iter().any(|i| i.is_object()) => {
                        println!("{pad}  {key}:");
                        for item in items {
                            print_fields(item, indent + 4);
                            println!();
                        }
                    }
                    _ => print_kv_indented(&pad, key, &plain(field)),
                }
            }
        }
        other => println!("{pad}  {}", plain(other)),
    }
}

fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn print_kv_indented(pad: &str, key: &str, value: &str) {
    println!("{pad}  {:<24} {}", format!("{key}:"), value);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    print_kv_indented("", key, value);
}

/// `-` for missing text.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

/// Short date, `-` when absent.
pub fn date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|v| v.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
