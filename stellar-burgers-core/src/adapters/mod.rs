//! Adapter implementations
//!
//! - In-process mock of the Stellar Burgers API, for tests that must not
//!   depend on the live service

#[cfg(any(test, feature = "test-support"))]
pub mod mock_server;
