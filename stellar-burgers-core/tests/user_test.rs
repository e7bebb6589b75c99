//! User registration and profile scenarios
//!
//! Run with: cargo test --test user_test

mod common;

use common::Scenario;
use stellar_burgers_core::{EmailUpdate, NameUpdate};

const REQUIRED_FIELDS: &str = "Email, password and name are required fields";
const UNAUTHORISED: &str = "You should be authorised";

#[test]
fn user_can_be_created_with_valid_data() {
    let scenario = Scenario::new();
    let user = scenario.random_user();

    let response = scenario.api.users.create(&user).unwrap();
    if let Some(token) = response.access_token().unwrap() {
        scenario.track(token);
    }

    response
        .assert_that()
        .status_code(200)
        .and()
        .assert_that()
        .body("success", true)
        .body_not_null("accessToken")
        .body("user.email", user.normalized_email())
        .body("user.name", user.name.as_str());
}

#[test]
fn user_cant_be_created_with_same_credentials() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    scenario.register(&user);

    scenario
        .api
        .users
        .create(&user)
        .unwrap()
        .assert_that()
        .status_code(403)
        .and()
        .assert_that()
        .body("success", false)
        .body("message", "User already exists");
}

#[test]
fn user_cant_be_created_without_email() {
    let scenario = Scenario::new();
    let mut user = scenario.random_user();
    user.email = String::new();

    scenario
        .api
        .users
        .create(&user)
        .unwrap()
        .assert_that()
        .status_code(403)
        .body("success", false)
        .body("message", REQUIRED_FIELDS);
}

#[test]
fn user_cant_be_created_without_password() {
    let scenario = Scenario::new();
    let mut user = scenario.random_user();
    user.password = String::new();

    scenario
        .api
        .users
        .create(&user)
        .unwrap()
        .assert_that()
        .status_code(403)
        .body("success", false)
        .body("message", REQUIRED_FIELDS);
}

#[test]
fn user_cant_be_created_without_name() {
    let scenario = Scenario::new();
    let mut user = scenario.random_user();
    user.name = String::new();

    scenario
        .api
        .users
        .create(&user)
        .unwrap()
        .assert_that()
        .status_code(403)
        .body("success", false)
        .body("message", REQUIRED_FIELDS);
}

#[test]
fn user_email_changed_successfully() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    let token = scenario.register(&user);

    let new_email = format!("{}n", user.email);
    scenario
        .api
        .users
        .update_email_authorized(&token, &EmailUpdate::new(new_email.as_str()))
        .unwrap()
        .assert_that()
        .status_code(200)
        .and()
        .assert_that()
        .body("success", true)
        .body("user.email", new_email.to_lowercase());
}

#[test]
fn user_name_changed_successfully() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    let token = scenario.register(&user);

    let new_name = format!("{}New", user.name);
    scenario
        .api
        .users
        .update_name_authorized(&token, &NameUpdate::new(new_name.as_str()))
        .unwrap()
        .assert_that()
        .status_code(200)
        .body("success", true)
        .body("user.name", new_name);
}

#[test]
fn user_email_change_without_authorization_failed() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    scenario.register(&user);

    scenario
        .api
        .users
        .update_email_unauthorized(&EmailUpdate::new(format!("{}n", user.email)))
        .unwrap()
        .assert_that()
        .status_code(401)
        .body("success", false)
        .body("message", UNAUTHORISED);
}

#[test]
fn user_name_change_without_authorization_failed() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    scenario.register(&user);

    scenario
        .api
        .users
        .update_name_unauthorized(&NameUpdate::new(format!("{}New", user.name)))
        .unwrap()
        .assert_that()
        .status_code(401)
        .body("success", false)
        .body("message", UNAUTHORISED);
}

#[test]
fn user_email_change_to_used_failed() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    let other = scenario.random_user();
    let token = scenario.register(&user);
    scenario.register(&other);

    scenario
        .api
        .users
        .update_email_authorized(&token, &EmailUpdate::new(other.email.as_str()))
        .unwrap()
        .assert_that()
        .status_code(403)
        .body("success", false)
        .body("message", "User with such email already exists");
}

#[test]
fn deleted_user_can_be_deleted_again_without_client_error() {
    let scenario = Scenario::new();
    let user = scenario.random_user();
    let response = scenario.api.users.create(&user).unwrap();
    let token = response.access_token().unwrap().unwrap();

    let first = scenario.api.users.delete(&token).unwrap();
    assert!(first.status().is_success(), "first delete: {}", first.body_text());

    // Transport-level contract only; the status is the server's call
    let second = scenario.api.users.delete(&token);
    assert!(second.is_ok());
}
