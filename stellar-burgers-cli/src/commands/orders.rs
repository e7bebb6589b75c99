//! Orders command - list orders of a user

use anyhow::Result;
use serde_json::Value;
use stellar_burgers_core::AccessToken;

use super::{finish, Connection};
use crate::output;

pub fn run(conn: &Connection, token: Option<&str>, json: bool) -> Result<()> {
    let response = match token {
        Some(token) => conn.api.orders.get_orders_of_user(&AccessToken::new(token))?,
        None => conn.api.orders.get_unauthorised_orders_of_user()?,
    };

    finish(&response, json, |response| {
        let orders: Vec<Value> = response.extract("orders")?.unwrap_or_default();
        if orders.is_empty() {
            output::info("No orders yet");
            return Ok(());
        }

        let mut table = output::create_table();
        table.set_header(vec!["Number", "Status", "Ingredients", "Created"]);
        for order in &orders {
            table.add_row(vec![
                field(order, "number"),
                field(order, "status"),
                order["ingredients"].as_array().map_or(0, Vec::len).to_string(),
                field(order, "createdAt"),
            ]);
        }
        println!("{}", table);

        if let Some(total) = response.extract::<u64>("total")? {
            output::info(&format!("{} orders in total", total));
        }
        Ok(())
    })
}

fn field(order: &Value, key: &str) -> String {
    match &order[key] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
