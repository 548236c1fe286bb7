use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Status metadata carried by every response body
#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub code: u16,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Uniform wrapper around every response body
///
/// Success bodies look like `{"meta":{"code":200},"data":...}`; failure
/// bodies omit `data` and fill in `meta.type` and `meta.error`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub meta: ResponseMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wraps a payload for a successful response
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            meta: ResponseMeta {
                code: status.as_u16(),
                kind: None,
                error: None,
            },
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Describes a failed request, with no payload
    pub fn failure(status: StatusCode, kind: &'static str, error: impl Into<String>) -> Self {
        Self {
            meta: ResponseMeta {
                code: status.as_u16(),
                kind: Some(kind),
                error: Some(error.into()),
            },
            data: None,
        }
    }
}

/// Successful API response with HTTP status and payload
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Creates a 200 OK response
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// Creates a 201 Created response
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::success(self.status, self.data))).into_response()
    }
}
