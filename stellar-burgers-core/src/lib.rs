//! Stellar Burgers Core - HTTP test clients for the Stellar Burgers API
//!
//! This crate is the layer conformance scenarios are written against:
//!
//! - **config**: base URL, base path, timeout and logging switches
//! - **client**: the shared request template and one client per resource
//! - **domain**: request payloads, response views and the error type
//! - **fixtures**: random user generation
//! - **adapters**: an in-process mock of the API (`test-support` feature)
//!
//! ```no_run
//! use stellar_burgers_core::{ApiClients, Config, Credentials, TestUserGenerator};
//!
//! let api = ApiClients::new(Config::from_env()?)?;
//! let user = TestUserGenerator::random();
//! let token = api.users.create(&user)?.access_token()?;
//!
//! api.login
//!     .login(&Credentials::from(&user))?
//!     .assert_that()
//!     .status_code(200)
//!     .body("user.email", user.normalized_email());
//!
//! if let Some(token) = token {
//!     api.users.delete(&token)?;
//! }
//! # Ok::<(), stellar_burgers_core::Error>(())
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod domain;
pub mod fixtures;
pub mod telemetry;

use client::RequestSpec;

// Re-export commonly used types at crate root
pub use client::{
    LoginClient, OrderClient, ResponseHandle, Step, UserClient, ValidatableResponse,
    NON_EXISTENT_INGREDIENT_ID,
};
pub use config::Config;
pub use domain::result::{Error, Result};
pub use domain::{
    AccessToken, ApiResponse, Credentials, EmailUpdate, Ingredient, NameUpdate, Order, User,
    UserProfile,
};
pub use fixtures::TestUserGenerator;

/// All resource clients built over one shared request template
///
/// Construction is the only place configuration enters; the clients keep
/// no per-call state, so one `ApiClients` can serve parallel scenarios.
#[derive(Debug, Clone)]
pub struct ApiClients {
    pub config: Config,
    pub login: LoginClient,
    pub users: UserClient,
    pub orders: OrderClient,
}

impl ApiClients {
    pub fn new(config: Config) -> Result<Self> {
        let spec = RequestSpec::new(&config)?;

        Ok(Self {
            login: LoginClient::new(spec.clone()),
            users: UserClient::new(spec.clone()),
            orders: OrderClient::new(spec),
            config,
        })
    }
}
