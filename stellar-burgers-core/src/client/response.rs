//! Response handle returned by every client call
//!
//! The body is kept as text and parsed on demand, so a non-JSON answer
//! (the live server replies to some 500s with an HTML page) still yields
//! a handle whose status can be checked. Reading a field out of such a
//! body is a decode error, and a body assertion on it fails the test.

use reqwest::blocking::Response;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};
use crate::domain::{AccessToken, ApiResponse};

/// Status, headers and raw body of one HTTP exchange
#[derive(Debug, Clone)]
pub struct ResponseHandle {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ResponseHandle {
    /// Drain a blocking response into a handle
    pub(crate) fn read(response: Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().map_err(Error::from_request)?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Build a handle from parts, for collaborators' own tests
    pub fn from_parts(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body_text(&self) -> &str {
        &self.body
    }

    /// Whole body as JSON
    pub fn json(&self) -> Result<JsonValue> {
        serde_json::from_str(&self.body).map_err(|e| {
            Error::decode(format!(
                "HTTP {} body is not JSON ({}): {}",
                self.status_code(),
                e,
                preview(&self.body)
            ))
        })
    }

    /// Whole body as a typed value
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.json()?).map_err(|e| {
            Error::decode(format!(
                "HTTP {} body has unexpected shape: {}",
                self.status_code(),
                e
            ))
        })
    }

    /// Value at a dotted path such as `user.email` or `data.0._id`
    ///
    /// `Ok(None)` means the body is JSON but the path is absent.
    pub fn path(&self, path: &str) -> Result<Option<JsonValue>> {
        let json = self.json()?;
        Ok(json.pointer(&to_pointer(path)).cloned())
    }

    /// Typed value at a dotted path
    pub fn extract<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.path(path)? {
            None | Some(JsonValue::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| Error::decode(format!("Field '{}' has unexpected type: {}", path, e))),
        }
    }

    /// `accessToken` from a register or login response, if any
    pub fn access_token(&self) -> Result<Option<AccessToken>> {
        self.extract("accessToken")
    }

    pub fn api_response(&self) -> Result<ApiResponse> {
        self.body_as()
    }

    /// Start a chain of assertions on this response
    pub fn assert_that(&self) -> ValidatableResponse<'_> {
        ValidatableResponse { response: self }
    }
}

/// Fluent assertions over a [`ResponseHandle`]
///
/// Each check panics with the path, the expected and actual values and the
/// raw body, which is how a failing scenario is reported.
#[derive(Debug, Clone, Copy)]
pub struct ValidatableResponse<'a> {
    response: &'a ResponseHandle,
}

impl<'a> ValidatableResponse<'a> {
    /// No-op connector for readable chains
    pub fn and(self) -> Self {
        self
    }

    /// No-op connector for readable chains
    pub fn assert_that(self) -> Self {
        self
    }

    #[track_caller]
    pub fn status_code(self, expected: u16) -> Self {
        let actual = self.response.status_code();
        if actual != expected {
            panic!(
                "expected status code <{}> but was <{}>\nbody: {}",
                expected,
                actual,
                preview(self.response.body_text())
            );
        }
        self
    }

    /// Field at `path` equals `expected`
    #[track_caller]
    pub fn body(self, path: &str, expected: impl Into<JsonValue>) -> Self {
        let expected = expected.into();
        match self.response.path(path) {
            Ok(Some(actual)) if actual == expected => self,
            Ok(actual) => panic!(
                "body path '{}': expected <{}> but was <{}>\nbody: {}",
                path,
                expected,
                actual.map_or_else(|| "missing".to_string(), |v| v.to_string()),
                preview(self.response.body_text())
            ),
            Err(e) => panic!("body path '{}': {}", path, e),
        }
    }

    /// Field at `path` is present and not `null`
    #[track_caller]
    pub fn body_not_null(self, path: &str) -> Self {
        match self.response.path(path) {
            Ok(Some(value)) if !value.is_null() => self,
            Ok(_) => panic!(
                "body path '{}': expected a value but was null or missing\nbody: {}",
                path,
                preview(self.response.body_text())
            ),
            Err(e) => panic!("body path '{}': {}", path, e),
        }
    }

    /// Field at `path` is absent or `null`
    #[track_caller]
    pub fn body_null(self, path: &str) -> Self {
        match self.response.path(path) {
            Ok(None) | Ok(Some(JsonValue::Null)) => self,
            Ok(Some(value)) => panic!(
                "body path '{}': expected null but was <{}>",
                path, value
            ),
            Err(e) => panic!("body path '{}': {}", path, e),
        }
    }

    pub fn response(self) -> &'a ResponseHandle {
        self.response
    }
}

/// `user.email` -> `/user/email`, escaping per RFC 6901
fn to_pointer(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    path.split('.')
        .map(|segment| segment.replace('~', "~0").replace('/', "~1"))
        .fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(&segment);
            pointer
        })
}

/// First part of a body, for error messages
fn preview(body: &str) -> String {
    const LIMIT: usize = 512;
    if body.chars().count() <= LIMIT {
        body.to_string()
    } else {
        let head: String = body.chars().take(LIMIT).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> ResponseHandle {
        ResponseHandle::from_parts(StatusCode::OK, body)
    }

    const LOGIN_BODY: &str = r#"{
        "success": true,
        "accessToken": "Bearer x.y.z",
        "user": {"email": "ginny@test.io", "name": "Ginny"},
        "orders": [{"number": 41}, {"number": 42}]
    }"#;

    #[test]
    fn test_to_pointer() {
        assert_eq!(to_pointer("user.email"), "/user/email");
        assert_eq!(to_pointer("data.0._id"), "/data/0/_id");
        assert_eq!(to_pointer("a/b~c"), "/a~1b~0c");
        assert_eq!(to_pointer(""), "");
    }

    #[test]
    fn test_path_extraction() {
        let response = ok(LOGIN_BODY);
        assert_eq!(
            response.path("user.email").unwrap(),
            Some(JsonValue::from("ginny@test.io"))
        );
        assert_eq!(response.extract::<u64>("orders.1.number").unwrap(), Some(42));
        assert_eq!(response.path("message").unwrap(), None);
    }

    #[test]
    fn test_access_token_extraction() {
        let token = ok(LOGIN_BODY).access_token().unwrap();
        assert_eq!(token, Some(AccessToken::new("Bearer x.y.z")));

        let none = ok(r#"{"success": false, "message": "nope"}"#)
            .access_token()
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_non_json_body_is_decode_error_on_read() {
        let response = ResponseHandle::from_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<!DOCTYPE html><pre>Internal Server Error</pre>",
        );
        assert_eq!(response.status_code(), 500);
        assert!(matches!(response.path("success"), Err(Error::Decode(_))));
        response.assert_that().status_code(500);
    }

    #[test]
    fn test_assertion_chain_passes() {
        ok(LOGIN_BODY)
            .assert_that()
            .status_code(200)
            .and()
            .assert_that()
            .body("success", true)
            .body("user.email", "ginny@test.io")
            .body("user.name", "Ginny")
            .body_not_null("accessToken")
            .body_null("message");
    }

    #[test]
    #[should_panic(expected = "expected status code <401> but was <200>")]
    fn test_status_mismatch_panics() {
        ok(LOGIN_BODY).assert_that().status_code(401);
    }

    #[test]
    #[should_panic(expected = "body path 'user.name': expected <\"Luna\"> but was <\"Ginny\">")]
    fn test_body_mismatch_panics() {
        ok(LOGIN_BODY).assert_that().body("user.name", "Luna");
    }

    #[test]
    #[should_panic(expected = "expected a value but was null or missing")]
    fn test_body_not_null_panics_on_missing() {
        ok(r#"{"success": false}"#)
            .assert_that()
            .body_not_null("accessToken");
    }

    #[test]
    #[should_panic(expected = "is not JSON")]
    fn test_body_assertion_on_html_panics() {
        ResponseHandle::from_parts(StatusCode::INTERNAL_SERVER_ERROR, "<html></html>")
            .assert_that()
            .body("success", false);
    }

    #[test]
    fn test_api_response_view() {
        let parsed = ok(LOGIN_BODY).api_response().unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.user.unwrap().email, "ginny@test.io");
    }
}
