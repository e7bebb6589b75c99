//! Shared scenario setup
//!
//! Scenarios run against an in-process mock server by default. Set
//! `STELLAR_BURGERS_LIVE=1` to run them against the configured live
//! server instead (see `Config::from_env`).

#![allow(dead_code)] // Each test binary uses a different subset

use std::cell::RefCell;

use stellar_burgers_core::adapters::mock_server::{MockConfig, MockStellarBurgersServer};
use stellar_burgers_core::{telemetry, AccessToken, ApiClients, Config, TestUserGenerator, User};

pub const LIVE_ENV: &str = "STELLAR_BURGERS_LIVE";

/// Clients plus the server they talk to and the accounts to remove
pub struct Scenario {
    pub api: ApiClients,
    pub generator: TestUserGenerator,
    cleanup: RefCell<Vec<AccessToken>>,
    server: Option<MockStellarBurgersServer>,
}

impl Scenario {
    pub fn new() -> Self {
        telemetry::init_for_tests();

        let live = matches!(
            std::env::var(LIVE_ENV).ok().as_deref(),
            Some("1" | "true" | "yes")
        );

        if live {
            let config = Config::from_env().expect("live config");
            Self {
                api: ApiClients::new(config).expect("clients"),
                generator: TestUserGenerator::for_run(),
                cleanup: RefCell::new(Vec::new()),
                server: None,
            }
        } else {
            let server =
                MockStellarBurgersServer::start(MockConfig::default()).expect("mock server");
            let config = Config::default()
                .with_base_url(&server.base_url())
                .expect("mock config")
                .with_body_logging(true, true);
            Self {
                api: ApiClients::new(config).expect("clients"),
                generator: TestUserGenerator::for_run(),
                cleanup: RefCell::new(Vec::new()),
                server: Some(server),
            }
        }
    }

    pub fn random_user(&self) -> User {
        self.generator.generate()
    }

    /// Register `user` and schedule its deletion
    pub fn register(&self, user: &User) -> AccessToken {
        let response = self.api.users.create(user).expect("register call");
        let token = response
            .access_token()
            .expect("register body")
            .unwrap_or_else(|| panic!("no accessToken in: {}", response.body_text()));
        self.track(token.clone());
        token
    }

    /// Schedule deletion of the account behind `token`
    pub fn track(&self, token: AccessToken) {
        self.cleanup.borrow_mut().push(token);
    }

    pub fn mock(&self) -> Option<&MockStellarBurgersServer> {
        self.server.as_ref()
    }
}

impl Drop for Scenario {
    fn drop(&mut self) {
        for token in self.cleanup.borrow_mut().drain(..) {
            match self.api.users.delete(&token) {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => tracing::warn!(
                    status = response.status_code(),
                    "cleanup delete was rejected"
                ),
                Err(e) => tracing::warn!(error = %e, "cleanup delete failed"),
            }
        }
    }
}
