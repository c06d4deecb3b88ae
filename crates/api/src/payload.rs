//! Raw JSON request bodies.
//!
//! Game payloads are accepted as untyped JSON and coerced by
//! `ludotheque_core::game`, so handlers take the body as bytes instead of a
//! typed `Json<T>` extractor.

use axum::body::Bytes;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Parse a request body as loose JSON.
///
/// An empty (or whitespace-only) body parses to `null`, which the game
/// validators report as a missing payload. Malformed JSON is a bad request.
pub fn parse_json_body(body: &Bytes) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_json_body(&Bytes::new()).unwrap(), Value::Null);
        assert_eq!(parse_json_body(&Bytes::from_static(b" \n")).unwrap(), Value::Null);
    }

    #[test]
    fn parses_any_json_shape() {
        assert_eq!(
            parse_json_body(&Bytes::from_static(br#"{"titre":"Doom"}"#)).unwrap(),
            json!({"titre": "Doom"})
        );
        assert_eq!(parse_json_body(&Bytes::from_static(b"[1]")).unwrap(), json!([1]));
    }

    #[test]
    fn malformed_json_is_bad_request() {
        assert_matches!(
            parse_json_body(&Bytes::from_static(b"{titre:")),
            Err(AppError::BadRequest(_))
        );
    }
}
