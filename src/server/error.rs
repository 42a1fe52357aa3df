//! Error types and response handling for the site server.
//!
//! Page routes answer with an HTML error page, API routes with a JSON
//! body. Every error response carries a request id that is also logged.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::i18n::I18nError;
use crate::page::{self, PageError};

/// Errors that can occur while starting or serving the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// String catalogs could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] I18nError),

    /// Feed client could not be created
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] PageError),

    /// No listener could be bound
    #[error("Could not bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// `run()` called without `try_bind()`
    #[error("Server is not bound")]
    NotBound,

    /// Buyers file exists but cannot be served
    #[error("Buyers file '{path}' is unusable: {reason}")]
    BuyersFile { path: PathBuf, reason: String },

    /// No route for the requested path
    #[error("Page '{path}' not found")]
    NotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound { .. } => StatusCode::NOT_FOUND,
            SiteError::Config(_)
            | SiteError::Catalog(_)
            | SiteError::Feed(_)
            | SiteError::Render(_)
            | SiteError::Bind { .. }
            | SiteError::NotBound
            | SiteError::BuyersFile { .. }
            | SiteError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            SiteError::Config(_) => "config_error",
            SiteError::Catalog(_) => "catalog_error",
            SiteError::Feed(_) => "feed_error",
            SiteError::Render(_) => "render_error",
            SiteError::Bind { .. } => "bind_error",
            SiteError::NotBound => "not_bound",
            SiteError::BuyersFile { .. } => "buyers_file_error",
            SiteError::NotFound { .. } => "not_found",
            SiteError::Io(_) => "io_error",
        }
    }

    fn is_api(&self) -> bool {
        matches!(self, SiteError::BuyersFile { .. })
    }

    /// Message safe to show to visitors.
    fn public_message(&self) -> String {
        match self {
            SiteError::NotFound { .. } => "Not Found".to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    /// JSON error body for API routes
    pub fn json(err: &SiteError, request_id: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.public_message(),
                "request_id": request_id
            }
        });

        (
            err.status_code(),
            [(CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }

    /// HTML error page for page routes
    pub fn html(err: &SiteError, request_id: &str) -> Response {
        let status = err.status_code();
        match page::render_error_page(status.as_u16(), &err.public_message()) {
            Ok(html) => (
                status,
                [(CONTENT_TYPE, "text/html; charset=utf-8")],
                html,
            )
                .into_response(),
            Err(render_err) => {
                tracing::error!(request_id, "Error page failed to render: {}", render_err);
                let mut response = Response::new(Body::from(err.public_message()));
                *response.status_mut() = status;
                response
            }
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        if self.status_code().is_server_error() {
            tracing::error!(request_id = %request_id, kind = self.error_type(), "{}", self);
        } else {
            tracing::debug!(request_id = %request_id, kind = self.error_type(), "{}", self);
        }

        if self.is_api() {
            ErrorResponse::json(&self, &request_id)
        } else {
            ErrorResponse::html(&self, &request_id)
        }
    }
}
