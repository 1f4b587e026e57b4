//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UsersClient` holds only `base_url`, the URL of the users collection
//! itself, and carries no mutable state between calls. Each CRUD operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O.
//!
//! Any 2xx status counts as success. Hosted mock services answer DELETE with
//! 200 and the removed record, the bundled mock server with 204 and no body;
//! both are accepted and the body is ignored.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{User, UserDraft, UserId};

/// Synchronous, stateless client for the users collection.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &UserDraft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_user(&self, id: &UserId, input: &UserDraft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_user(&self, id: &UserId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn member_url(&self, id: &UserId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &UserDraft) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
