//! Order scenarios
//!
//! Run with: cargo test --test order_test

mod common;

use common::Scenario;
use stellar_burgers_core::{Order, NON_EXISTENT_INGREDIENT_ID};

#[test]
fn order_successful_creation() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());
    let order = Order::new(scenario.api.orders.get_ingredients(3).unwrap());

    scenario
        .api
        .orders
        .create_order(&token, &order)
        .unwrap()
        .assert_that()
        .status_code(200)
        .body("success", true)
        .body_not_null("order.number");
}

#[test]
fn order_creation_unauthorized_succeeds() {
    let scenario = Scenario::new();
    scenario.register(&scenario.random_user());
    let order = Order::new(scenario.api.orders.get_ingredients(3).unwrap());

    scenario
        .api
        .orders
        .create_order_unauthorized(&order)
        .unwrap()
        .assert_that()
        .status_code(200);
}

#[test]
fn order_creation_without_ingredients_failed() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());

    scenario
        .api
        .orders
        .create_order(&token, &Order::without_ingredients())
        .unwrap()
        .assert_that()
        .status_code(400)
        .and()
        .assert_that()
        .body("success", false)
        .body("message", "Ingredient ids must be provided");
}

#[test]
fn order_creation_with_empty_ingredient_list_failed() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());

    scenario
        .api
        .orders
        .create_order(&token, &Order::new(Vec::<String>::new()))
        .unwrap()
        .assert_that()
        .status_code(400)
        .body("message", "Ingredient ids must be provided");
}

#[test]
fn order_creation_with_non_existent_id() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());

    let response = scenario
        .api
        .orders
        .create_order(&token, &Order::new([NON_EXISTENT_INGREDIENT_ID]))
        .unwrap();

    response.assert_that().status_code(500);
}

#[test]
fn order_creation_with_one_to_four_ingredients() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());

    for count in 1..=4 {
        let ids = scenario.api.orders.get_ingredients(count).unwrap();
        assert_eq!(ids.len(), count);

        scenario
            .api
            .orders
            .create_order(&token, &Order::new(ids.clone()))
            .unwrap()
            .assert_that()
            .status_code(200);
        scenario
            .api
            .orders
            .create_order_unauthorized(&Order::new(ids))
            .unwrap()
            .assert_that()
            .status_code(200);
    }
}

#[test]
fn get_orders_of_user() {
    let scenario = Scenario::new();
    let token = scenario.register(&scenario.random_user());
    let order = Order::new(scenario.api.orders.get_ingredients(2).unwrap());
    scenario.api.orders.create_order(&token, &order).unwrap();

    scenario
        .api
        .orders
        .get_orders_of_user(&token)
        .unwrap()
        .assert_that()
        .status_code(200)
        .and()
        .assert_that()
        .body("success", true)
        .body_not_null("orders.0.number");
}

#[test]
fn get_unauthorised_orders_of_user() {
    let scenario = Scenario::new();
    scenario.register(&scenario.random_user());
    let order = Order::new(scenario.api.orders.get_ingredients(4).unwrap());
    scenario.api.orders.create_order_unauthorized(&order).unwrap();

    scenario
        .api
        .orders
        .get_unauthorised_orders_of_user()
        .unwrap()
        .assert_that()
        .status_code(401)
        .and()
        .assert_that()
        .body("success", false)
        .body("message", "You should be authorised");
}

#[test]
fn ingredient_catalog_lists_known_ids() {
    let scenario = Scenario::new();
    let response = scenario.api.orders.list_ingredients().unwrap();

    response
        .assert_that()
        .status_code(200)
        .body("success", true)
        .body_not_null("data.0._id");

    let ids = scenario.api.orders.get_ingredients(usize::MAX).unwrap();
    assert!(!ids.is_empty());
    assert!(!ids.iter().any(|id| id == NON_EXISTENT_INGREDIENT_ID));
    if let Some(server) = scenario.mock() {
        assert_eq!(ids, server.catalog_ids());
    }
}
