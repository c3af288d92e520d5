//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Plain-text confirmation returned by write endpoints.
#[derive(Debug)]
pub struct Message {
    status: StatusCode,
    text: String,
}

impl Message {
    /// `200 OK` with the given text.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            text: text.into(),
        }
    }

    /// `201 Created` with the given text.
    pub fn created(text: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            text: text.into(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        (self.status, self.text).into_response()
    }
}
