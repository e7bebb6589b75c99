//! Login command

use anyhow::Result;
use stellar_burgers_core::Credentials;

use super::{finish, Connection};
use crate::output;

pub fn run(conn: &Connection, email: &str, password: &str, json: bool) -> Result<()> {
    let response = conn.api.login.login(&Credentials::new(email, password))?;

    finish(&response, json, |response| {
        let body = response.api_response()?;
        match &body.user {
            Some(profile) => {
                output::success(&format!("Logged in as {} <{}>", profile.name, profile.email))
            }
            None => output::success("Logged in"),
        }
        if let Some(token) = &body.access_token {
            println!("{}", token.as_str());
        }
        Ok(())
    })
}
