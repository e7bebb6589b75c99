//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use stellar_burgers_core::ResponseHandle;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Status line such as `200 OK`, colored by class
pub fn status_line(response: &ResponseHandle) -> String {
    let status = response.status();
    let text = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    );
    let text = text.trim_end().to_string();

    if status.is_success() {
        text.green().to_string()
    } else if status.is_client_error() {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Pretty JSON body, or the raw text when the body is not JSON
pub fn print_body(response: &ResponseHandle) {
    match response.json() {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", response.body_text()),
        },
        Err(_) => println!("{}", response.body_text()),
    }
}

/// Format a price the way the storefront shows it
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1255.0), "1255");
        assert_eq!(format_price(88.5), "88.50");
    }
}
