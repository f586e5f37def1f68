//! HTTP client for the birthday API

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use bdays_core::{Birthday, BirthdayInput};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Failures talking to the birthday API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Unable to connect to the server. Please check your internet connection.")]
    Unreachable,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// HTTP client for the birthday API
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

// Request/response types matching the server API

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Body for PUT /users/me. Password fields are only sent together.
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

impl Client {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach JSON headers and the bearer token, if any.
    fn prepare(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header(reqwest::header::CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send_raw(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = self.prepare(req).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ApiError::Unreachable
            } else {
                ApiError::Request(e.to_string())
            }
        })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "api response");

        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }

        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(req).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST /register
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        tracing::info!(email, "registering account");
        let body = RegisterRequest { name, email, password };
        self.send_raw(self.http.post(self.url("/register")).json(&body))
            .await
            .map(|_| ())
    }

    /// POST /login, returning the bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        tracing::info!(email, "logging in");
        let body = LoginRequest { email, password };
        let resp: LoginResponse = self
            .send(self.http.post(self.url("/login")).json(&body))
            .await?;
        Ok(resp.token)
    }

    /// GET /users/me
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.send(self.http.get(self.url("/users/me"))).await
    }

    /// PUT /users/me
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.send(self.http.put(self.url("/users/me")).json(update))
            .await
    }

    /// DELETE /users/me
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.send_raw(self.http.delete(self.url("/users/me")))
            .await
            .map(|_| ())
    }

    /// GET /birthdays
    ///
    /// Records that fail to decode (e.g. a malformed `birth_date`) are
    /// skipped with a warning instead of failing the whole list.
    pub async fn list_birthdays(&self) -> Result<Vec<Birthday>, ApiError> {
        let body = self.send_raw(self.http.get(self.url("/birthdays"))).await?;
        decode_birthdays(&body)
    }

    /// GET /birthdays/{id}
    pub async fn get_birthday(&self, id: &str) -> Result<Birthday, ApiError> {
        self.send(self.http.get(self.url(&format!("/birthdays/{id}"))))
            .await
    }

    /// POST /birthdays
    pub async fn create_birthday(&self, input: &BirthdayInput) -> Result<Birthday, ApiError> {
        self.send(self.http.post(self.url("/birthdays")).json(input))
            .await
    }

    /// PUT /birthdays/{id}
    pub async fn update_birthday(&self, id: &str, input: &BirthdayInput) -> Result<Birthday, ApiError> {
        self.send(self.http.put(self.url(&format!("/birthdays/{id}"))).json(input))
            .await
    }

    /// DELETE /birthdays/{id}
    pub async fn delete_birthday(&self, id: &str) -> Result<(), ApiError> {
        self.send_raw(self.http.delete(self.url(&format!("/birthdays/{id}"))))
            .await
            .map(|_| ())
    }
}

/// Map a non-success response to an [`ApiError`].
///
/// The message comes from the JSON `error` field, then `message`, then a default.
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error.or(e.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

/// Decode a birthday list, dropping entries that are not valid records.
fn decode_birthdays(body: &str) -> Result<Vec<Birthday>, ApiError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(values
        .into_iter()
        .filter_map(|value| {
            let id = value.get("id").map(|id| id.to_string()).unwrap_or_default();
            match serde_json::from_value::<Birthday>(value) {
                Ok(birthday) => Some(birthday),
                Err(error) => {
                    tracing::warn!(%id, %error, "skipping birthday with invalid birth_date");
                    None
                }
            }
        })
        .collect())
}
