//! Response Envelope
//!
//! Every endpoint answers with `{"status": <code>, "data": ...}` on success.
//! Failures are rendered by `AppError` as `{"status": <code>, "error": ...}`.

use serde::Serialize;

/// Success half of the response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self { status: 201, data }
    }
}

/// `{"message": ...}` payload used by acknowledgement-only endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(feature = "axum")]
impl<T> axum::response::IntoResponse for Envelope<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(Envelope::created(Message::new("done"))).unwrap();
        assert_eq!(body["status"], 201);
        assert_eq!(body["data"]["message"], "done");
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_envelope_with_string_data() {
        let body = serde_json::to_value(Envelope::ok("No sessions found for the user.")).unwrap();
        assert_eq!(body["status"], 200);
        assert_eq!(body["data"], "No sessions found for the user.");
    }
}
