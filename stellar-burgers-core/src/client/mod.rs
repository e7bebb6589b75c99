//! Resource clients
//!
//! Each client owns a clone of the shared [`RequestSpec`] and maps one
//! method to one endpoint:
//! - [`LoginClient`] for `auth/login`
//! - [`UserClient`] for `auth/register` and `auth/user`
//! - [`OrderClient`] for `orders` and `ingredients`

mod login;
mod order;
mod response;
mod spec;
pub mod step;
mod user;

pub use login::LoginClient;
pub use order::{OrderClient, NON_EXISTENT_INGREDIENT_ID};
pub use response::{ResponseHandle, ValidatableResponse};
pub use spec::{ApiRequest, RequestSpec};
pub use step::Step;
pub use user::UserClient;
