//! Stateless request builder and response parser for the users endpoint.
//!
//! # Design
//! `UsersClient` holds only a `base_url`. Fetching the list is split into
//! `build_list_users`, which produces an `HttpRequest`, and
//! `parse_list_users`, which consumes the `HttpResponse`. The caller executes
//! the round-trip in between. There is no retry and no pagination.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::User;

/// The public endpoint the dashboard reads by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersClient {
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> UsersClient {
        UsersClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn default_client_targets_public_endpoint() {
        let req = UsersClient::default().build_list_users();
        assert_eq!(req.path, "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = UsersClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_list_users().path, "http://localhost:3000/users");
    }

    #[test]
    fn parse_list_users_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"name":"Leanne Graham","email":"Sincere@april.biz","phone":"1-770-736-8031","website":"hildegard.org","company":{"name":"Romaguera-Crona"}}]"#,
        );
        let users = client().parse_list_users(response).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
    }

    #[test]
    fn parse_list_users_empty_array() {
        let users = client().parse_list_users(HttpResponse::new(200, "[]")).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn parse_list_users_not_found_is_http_error() {
        let err = client()
            .parse_list_users(HttpResponse::new(404, "{}"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 404,
                body: "{}".to_string()
            }
        );
    }

    #[test]
    fn parse_list_users_server_error() {
        let err = client()
            .parse_list_users(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_users_bad_json() {
        let err = client()
            .parse_list_users(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_users_rejects_object_body() {
        let err = client()
            .parse_list_users(HttpResponse::new(200, r#"{"users":[]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
