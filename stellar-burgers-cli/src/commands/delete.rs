//! Delete command - remove the account behind a token

use anyhow::Result;
use stellar_burgers_core::AccessToken;

use super::{finish, Connection};
use crate::output;

pub fn run(conn: &Connection, token: &str, json: bool) -> Result<()> {
    let response = conn.api.users.delete(&AccessToken::new(token))?;

    finish(&response, json, |response| {
        let message = response.extract::<String>("message").ok().flatten();
        output::success(message.as_deref().unwrap_or("Account deleted"));
        Ok(())
    })
}
