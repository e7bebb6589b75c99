//! User account client
//!
//! Authorized and unauthorized profile updates are separate methods: a
//! scenario that wants the "missing credential" path calls the
//! unauthorized one explicitly instead of passing an empty token.

use super::step::Step;
use super::{RequestSpec, ResponseHandle};
use crate::domain::result::Result;
use crate::domain::{AccessToken, EmailUpdate, NameUpdate, User};

const USER_CREATE_PATH: &str = "auth/register";
const USER_BASE_PATH: &str = "auth/user";

/// Client for `auth/register` and `auth/user`
#[derive(Debug, Clone)]
pub struct UserClient {
    spec: RequestSpec,
}

impl UserClient {
    pub fn new(spec: RequestSpec) -> Self {
        Self { spec }
    }

    /// Register the fixture as given, invalid fields included
    pub fn create(&self, user: &User) -> Result<ResponseHandle> {
        let step = Step::new("Create user").arg("user", user);
        let request = self.spec.post(USER_CREATE_PATH)?.json(user)?;
        self.spec.execute(&step, request)
    }

    /// Remove the account behind `access_token`
    ///
    /// Always issues the call; a stale token just gets an error status back.
    pub fn delete(&self, access_token: &AccessToken) -> Result<ResponseHandle> {
        let step = Step::new("Delete user").arg("token", access_token);
        let request = self.spec.delete(USER_BASE_PATH)?.bearer(access_token);
        self.spec.execute(&step, request)
    }

    /// Read the profile behind `access_token`
    pub fn get(&self, access_token: &AccessToken) -> Result<ResponseHandle> {
        let step = Step::new("Get user profile").arg("token", access_token);
        let request = self.spec.get(USER_BASE_PATH)?.bearer(access_token);
        self.spec.execute(&step, request)
    }

    pub fn update_email_authorized(
        &self,
        access_token: &AccessToken,
        update: &EmailUpdate,
    ) -> Result<ResponseHandle> {
        let step = Step::new("Update email of authorized user")
            .arg("token", access_token)
            .arg("update", update);
        let request = self
            .spec
            .patch(USER_BASE_PATH)?
            .bearer(access_token)
            .json(update)?;
        self.spec.execute(&step, request)
    }

    pub fn update_name_authorized(
        &self,
        access_token: &AccessToken,
        update: &NameUpdate,
    ) -> Result<ResponseHandle> {
        let step = Step::new("Update name of authorized user")
            .arg("token", access_token)
            .arg("update", update);
        let request = self
            .spec
            .patch(USER_BASE_PATH)?
            .bearer(access_token)
            .json(update)?;
        self.spec.execute(&step, request)
    }

    pub fn update_email_unauthorized(&self, update: &EmailUpdate) -> Result<ResponseHandle> {
        let step = Step::new("Update email of unauthorized user").arg("update", update);
        let request = self.spec.patch(USER_BASE_PATH)?.json(update)?;
        self.spec.execute(&step, request)
    }

    pub fn update_name_unauthorized(&self, update: &NameUpdate) -> Result<ResponseHandle> {
        let step = Step::new("Update name of unauthorized user").arg("update", update);
        let request = self.spec.patch(USER_BASE_PATH)?.json(update)?;
        self.spec.execute(&step, request)
    }
}
