//! Register command - create an account

use anyhow::{Context, Result};
use stellar_burgers_core::{ApiResponse, TestUserGenerator, User};

use super::{finish, Connection};
use crate::output;

/// Build the user to register from CLI flags
pub fn user_from_args(
    random: bool,
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
) -> Result<User> {
    if random {
        return Ok(TestUserGenerator::random());
    }
    Ok(User::new(
        email.context("--email is required")?,
        password.context("--password is required")?,
        name.context("--name is required")?,
    ))
}

pub fn run(conn: &Connection, user: &User, json: bool) -> Result<()> {
    let response = conn.api.users.create(user)?;

    finish(&response, json, |response| {
        let body: ApiResponse = response.api_response()?;
        output::success(&format!("Registered {}", user));

        let mut table = output::create_table();
        table.add_row(vec!["Email", user.email.as_str()]);
        table.add_row(vec!["Password", user.password.as_str()]);
        if let Some(token) = &body.access_token {
            table.add_row(vec!["Access token", token.as_str()]);
        }
        if let Some(refresh) = &body.refresh_token {
            table.add_row(vec!["Refresh token", refresh.as_str()]);
        }
        println!("{}", table);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_ignores_flags() {
        let user = user_from_args(true, None, None, None).unwrap();
        assert!(user.email.contains('@'));
    }

    #[test]
    fn test_explicit_user_requires_all_fields() {
        let user = user_from_args(
            false,
            Some("ron@test.io".into()),
            Some("scabbers".into()),
            Some("Ron".into()),
        )
        .unwrap();
        assert_eq!(user.name, "Ron");

        let missing_password =
            user_from_args(false, Some("ron@test.io".into()), None, Some("Ron".into()));
        assert!(missing_password.is_err());
    }
}
