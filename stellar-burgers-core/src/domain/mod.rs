//! Request and response data model
//!
//! Plain records only; nothing here touches the network.

mod order;
pub mod response;
pub mod result;
mod token;
mod user;

pub use order::Order;
pub use response::{ApiResponse, Ingredient, IngredientsResponse, UserProfile};
pub use token::AccessToken;
pub use user::{Credentials, EmailUpdate, NameUpdate, User};
