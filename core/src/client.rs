//! Thin client for the JSONPlaceholder `/users` resource.
//!
//! # Design
//! `UserClient` holds the base URL and a `Transport`, and nothing else. Each
//! operation is split into a pure `build_*` method that produces an
//! `HttpRequest` and an executing method that sends it and hands back the
//! `HttpResponse` exactly as received. There is no status translation and no
//! retry: whatever the API answers is what the caller asserts on.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Synchronous client for the users endpoints.
#[derive(Clone)]
pub struct UserClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl UserClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    /// Client for the `BASE_URL` found in `section` of the default
    /// configuration file.
    pub fn from_config(section: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(&config::extract_base_url(section)?))
    }

    pub fn from_config_file(path: impl AsRef<Path>, section: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(&config::extract_base_url_from(path, section)?))
    }
}

impl<T> UserClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.users_endpoint(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.user_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user<P: Serialize + ?Sized>(&self, payload: &P) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.users_endpoint(), payload)
    }

    /// Full replacement (`PUT`).
    pub fn build_update_user<P: Serialize + ?Sized>(&self, id: u64, payload: &P) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.user_url(id), payload)
    }

    /// Partial update (`PATCH`).
    pub fn build_patch_user<P: Serialize + ?Sized>(&self, id: u64, payload: &P) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Patch, self.user_url(id), payload)
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.user_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}

impl<T: Transport> UserClient<T> {
    /// `GET /users`
    pub fn get_all_users(&self) -> Result<HttpResponse, ApiError> {
        self.send(self.build_list_users())
    }

    /// `GET /users/{id}`
    pub fn get_user_by_id(&self, id: u64) -> Result<HttpResponse, ApiError> {
        self.send(self.build_get_user(id))
    }

    /// `POST /users`
    pub fn create_user<P: Serialize + ?Sized>(&self, payload: &P) -> Result<HttpResponse, ApiError> {
        self.send(self.build_create_user(payload)?)
    }

    /// `PUT /users/{id}`
    pub fn update_user<P: Serialize + ?Sized>(&self, id: u64, payload: &P) -> Result<HttpResponse, ApiError> {
        self.send(self.build_update_user(id, payload)?)
    }

    /// `PATCH /users/{id}`
    pub fn patch_user<P: Serialize + ?Sized>(&self, id: u64, payload: &P) -> Result<HttpResponse, ApiError> {
        self.send(self.build_patch_user(id, payload)?)
    }

    /// `DELETE /users/{id}`
    pub fn delete_user(&self, id: u64) -> Result<HttpResponse, ApiError> {
        self.send(self.build_delete_user(id))
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}

fn json_request<P: Serialize + ?Sized>(method: HttpMethod, path: String, payload: &P) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}
