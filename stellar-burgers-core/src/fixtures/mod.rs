//! Test data generation

mod generator;

pub use generator::{TestUserGenerator, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
