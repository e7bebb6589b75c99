//! Config command - show or persist the effective settings

use anyhow::{Context, Result};
use serde_json::json;

use super::Connection;
use crate::output;

pub fn run(conn: &Connection, save: bool, json: bool) -> Result<()> {
    let config = &conn.api.config;

    if save {
        std::fs::create_dir_all(&conn.settings_dir).with_context(|| {
            format!("Failed to create settings directory: {:?}", conn.settings_dir)
        })?;
        config.save(&conn.settings_dir)?;
    }

    let timeout = config.timeout.map(|t| t.as_secs());
    let api_root = config.api_root()?;

    if json {
        let value = json!({
            "settingsDir": conn.settings_dir,
            "apiRoot": api_root.as_str(),
            "timeoutSecs": timeout,
            "logRequests": config.log_requests,
            "logResponses": config.log_responses,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.add_row(vec!["Settings", &conn.settings_dir.display().to_string()]);
    table.add_row(vec!["API root", api_root.as_str()]);
    table.add_row(vec![
        "Timeout",
        &timeout.map_or_else(|| "none".to_string(), |s| format!("{}s", s)),
    ]);
    table.add_row(vec!["Log requests", &config.log_requests.to_string()]);
    table.add_row(vec!["Log responses", &config.log_responses.to_string()]);
    println!("{}", table);

    if save {
        output::success("Settings saved");
    }
    Ok(())
}
