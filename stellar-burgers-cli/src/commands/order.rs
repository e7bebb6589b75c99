//! Order command - place an order

use anyhow::{bail, Result};
use stellar_burgers_core::{AccessToken, Order};

use super::{finish, Connection};
use crate::output;

pub fn run(
    conn: &Connection,
    ids: Vec<String>,
    first: Option<usize>,
    token: Option<&str>,
    json: bool,
) -> Result<()> {
    let ids = match first {
        Some(count) => {
            let ids = conn.api.orders.get_ingredients(count)?;
            if ids.len() < count {
                bail!("Catalog only has {} ingredients", ids.len());
            }
            ids
        }
        None => ids,
    };
    let order = Order::new(ids);

    let response = match token {
        Some(token) => conn.api.orders.create_order(&AccessToken::new(token), &order)?,
        None => conn.api.orders.create_order_unauthorized(&order)?,
    };

    finish(&response, json, |response| {
        let name = response.extract::<String>("name")?.unwrap_or_default();
        match response.extract::<u64>("order.number")? {
            Some(number) => output::success(&format!("Order #{} placed {}", number, name)),
            None => output::success("Order placed"),
        }
        Ok(())
    })
}
