use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    PropertyNotFound,
    PropertiesLoadFailed,
    PropertySaveFailed,
    PropertiesSaveFailed,
    InvalidCredentials,
    LoginFailed,
    SettingsLoadFailed,
    SettingsSaveFailed,
    MethodNotAllowed,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl ErrorMessage {
    fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::PropertyNotFound => "Property not found",
            ErrorMessage::PropertiesLoadFailed => "Failed to load properties",
            ErrorMessage::PropertySaveFailed => "Failed to save property",
            ErrorMessage::PropertiesSaveFailed => "Failed to save properties",
            ErrorMessage::InvalidCredentials => "Invalid credentials",
            ErrorMessage::LoginFailed => "Login failed",
            ErrorMessage::SettingsLoadFailed => "Failed to load admin settings",
            ErrorMessage::SettingsSaveFailed => "Failed to save settings",
            ErrorMessage::MethodNotAllowed => "Method not allowed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn method_not_allowed() -> Self {
        HttpError::new(
            ErrorMessage::MethodNotAllowed.to_string(),
            StatusCode::METHOD_NOT_ALLOWED,
        )
    }

    pub fn into_http_response(self) -> Response {
        let json_response = Json(ErrorResponse {
            error: self.message,
        });

        (self.status, json_response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}
