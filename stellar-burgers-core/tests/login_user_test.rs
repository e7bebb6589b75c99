//! Login scenarios
//!
//! Run with: cargo test --test login_user_test

mod common;

use common::Scenario;
use regex::Regex;
use stellar_burgers_core::fixtures::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use stellar_burgers_core::Credentials;

const BAD_CREDENTIALS: &str = "email or password are incorrect";

#[test]
fn login_with_existed_user_is_successful() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    scenario.register(&user);

    scenario
        .api
        .login
        .login(&Credentials::from(&user))
        .unwrap()
        .assert_that()
        .status_code(200)
        .and()
        .assert_that()
        .body("success", true)
        .body("user.email", user.normalized_email())
        .body("user.name", user.name.as_str());
}

#[test]
fn login_with_invalid_email_failed() {
    let scenario = Scenario::new();
    let mut user = scenario.random_user();
    scenario.register(&user);
    user.email = String::new();

    scenario
        .api
        .login
        .login(&Credentials::from(&user))
        .unwrap()
        .assert_that()
        .status_code(401)
        .body("success", false)
        .body("message", BAD_CREDENTIALS);
}

#[test]
fn login_with_invalid_password_failed() {
    let scenario = Scenario::new();
    let mut user = scenario.random_user();
    scenario.register(&user);
    user.password = String::new();

    scenario
        .api
        .login
        .login(&Credentials::from(&user))
        .unwrap()
        .assert_that()
        .status_code(401)
        .body("success", false)
        .body("message", BAD_CREDENTIALS);
}

#[test]
fn login_issues_token_usable_for_profile_reads() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    scenario.register(&user);

    let response = scenario.api.login.login(&Credentials::from(&user)).unwrap();
    let token = response.access_token().unwrap().expect("login token");

    scenario
        .api
        .users
        .get(&token)
        .unwrap()
        .assert_that()
        .status_code(200)
        .body("user.email", user.normalized_email());
}

/// Every generated fixture registers and logs in with its own credentials
#[test]
fn random_users_register_and_login() {
    let scenario = Scenario::new();
    let email_syntax = Regex::new(r"^[a-z0-9.\-]+@[a-z0-9\-]+(\.[a-z0-9\-]+)+$").unwrap();

    for _ in 0..10 {
        let user = scenario.random_user();
        assert!(email_syntax.is_match(&user.email), "bad email {}", user.email);
        let len = user.password.chars().count();
        assert!((PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len));

        scenario.register(&user);
        scenario
            .api
            .login
            .login(&Credentials::from(&user))
            .unwrap()
            .assert_that()
            .status_code(200)
            .body("user.email", user.normalized_email());
    }
}
