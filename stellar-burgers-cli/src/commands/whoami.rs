//! Whoami command - show the profile behind a token

use anyhow::Result;
use stellar_burgers_core::AccessToken;

use super::{finish, Connection};
use crate::output;

pub fn run(conn: &Connection, token: &str, json: bool) -> Result<()> {
    let response = conn.api.users.get(&AccessToken::new(token))?;

    finish(&response, json, |response| {
        match response.api_response()?.user {
            Some(profile) => {
                let mut table = output::create_table();
                table.add_row(vec!["Name", profile.name.as_str()]);
                table.add_row(vec!["Email", profile.email.as_str()]);
                println!("{}", table);
            }
            None => output::warning("Server returned no profile"),
        }
        Ok(())
    })
}
