//! Ingredients command - show the catalog

use anyhow::Result;
use colored::Colorize;
use stellar_burgers_core::domain::IngredientsResponse;

use super::{finish, Connection};
use crate::output;

pub fn run(conn: &Connection, count: Option<usize>, json: bool) -> Result<()> {
    let response = conn.api.orders.list_ingredients()?;

    finish(&response, json, |response| {
        let catalog: IngredientsResponse = response.body_as()?;
        let shown = count.unwrap_or(catalog.data.len()).min(catalog.data.len());

        println!("{}", "Ingredients".bold());
        let mut table = output::create_table();
        table.set_header(vec!["ID", "Name", "Type", "Price"]);
        for ingredient in catalog.data.iter().take(shown) {
            table.add_row(vec![
                ingredient.id.clone(),
                ingredient.name.clone(),
                ingredient.kind.clone(),
                output::format_price(ingredient.price),
            ]);
        }
        println!("{}", table);

        if shown < catalog.data.len() {
            output::info(&format!("{} of {} shown", shown, catalog.data.len()));
        }
        Ok(())
    })
}
