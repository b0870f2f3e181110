//! Response normalization.
//!
//! Every response, whatever its content type, is reduced to either a decoded
//! `Payload` or an `ApiError::Status` carrying a message fit for display.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Body that was not valid JSON, kept exactly as received.
    Text(String),
}

impl Payload {
    /// The payload as a string, when it is one (raw text or a JSON string).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(Value::String(text)) => Some(text),
            Payload::Json(_) => None,
        }
    }

    /// True for an empty text body.
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Text(text) if text.is_empty())
    }
}

/// Decode a body according to its declared content type.
///
/// JSON content types are decoded strictly, except that a blank body is an
/// empty `Text` payload. Anything else is decoded as JSON on a best-effort
/// basis and falls back to the raw text.
pub fn decode_body(response: &HttpResponse) -> Result<Payload, ApiError> {
    if response.content_type().contains("application/json") {
        if response.body.trim().is_empty() {
            return Ok(Payload::Text(String::new()));
        }
        return serde_json::from_str(&response.body)
            .map(Payload::Json)
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    Ok(match serde_json::from_str(&response.body) {
        Ok(value) => Payload::Json(value),
        Err(_) => Payload::Text(response.body.clone()),
    })
}

/// Message for a failed status: the server's own text when it has any,
/// otherwise a synthesized one naming the status code.
pub fn error_message(status: u16, payload: &Payload) -> String {
    match payload.as_text() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => format!("Request failed ({status})"),
    }
}

/// Decode the body and fail on non-2xx status.
pub fn normalize(response: HttpResponse) -> Result<Payload, ApiError> {
    if !response.is_success() {
        return Err(status_error(&response));
    }
    decode_body(&response)
}

/// Fail on non-2xx status without decoding a successful body.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(status_error(response))
    }
}

fn status_error(response: &HttpResponse) -> ApiError {
    // An undecodable error body falls back to its raw text.
    let payload = decode_body(response).unwrap_or_else(|_| Payload::Text(response.body.clone()));
    let message = error_message(response.status, &payload);
    tracing::warn!(status = response.status, %message, "request failed");
    ApiError::Status {
        status: response.status,
        message,
    }
}
