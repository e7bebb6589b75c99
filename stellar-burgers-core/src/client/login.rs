//! Login client

use super::step::Step;
use super::{RequestSpec, ResponseHandle};
use crate::domain::result::Result;
use crate::domain::Credentials;

const USER_LOGIN_PATH: &str = "auth/login";

/// Client for `POST auth/login`
#[derive(Debug, Clone)]
pub struct LoginClient {
    spec: RequestSpec,
}

impl LoginClient {
    pub fn new(spec: RequestSpec) -> Self {
        Self { spec }
    }

    /// Log in with credentials derived from a user fixture
    pub fn login(&self, credentials: &Credentials) -> Result<ResponseHandle> {
        let step = Step::new("Login in user").arg("credentials", credentials);
        let request = self.spec.post(USER_LOGIN_PATH)?.json(credentials)?;
        self.spec.execute(&step, request)
    }
}
