//! Typed views over API response bodies

use serde::{Deserialize, Serialize};

use super::AccessToken;

/// Common envelope returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub access_token: Option<AccessToken>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Public part of a user as echoed by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// Ingredient catalog entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub price: f64,
}

/// Body of `GET ingredients`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IngredientsResponse {
    pub success: bool,
    pub data: Vec<Ingredient>,
}
