use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{
    Deserialize, Serialize,
    de::{DeserializeOwned, Error as _, Unexpected},
};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::TodoError;

/// JSON body extractor that accepts exactly one object and nothing else.
///
/// Unlike `axum::Json` it does not look at `Content-Type`. Malformed JSON,
/// non-object values, trailing data and (with `deny_unknown_fields` on `T`)
/// unknown fields all surface as a 400 `invalid request body`.
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => return Err(rejection.into_response()),
        };

        decode_object(&body).map(StrictJson).map_err(|e| {
            debug!(error = %e, "failed to decode request body");
            TodoError::validation("invalid request body").into_response()
        })
    }
}

/// Decode `body` into `T`, accepting only a single JSON object.
///
/// Derived struct deserializers also accept arrays, so the shape is checked
/// on the intermediate `Value` first.
pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        obj @ Value::Object(_) => T::deserialize(obj),
        other => Err(serde_json::Error::invalid_type(
            unexpected(&other),
            &"a JSON object",
        )),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Serialize `value` as an `application/json` response with `status`.
///
/// Encoding happens before anything is sent, so a failure is logged and
/// turned into a plain 500.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to encode response",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Payload {
        title: Option<String>,
        completed: Option<bool>,
    }

    #[test]
    fn decode_object_accepts_objects() {
        let p: Payload = decode_object(br#"{"title":"x","completed":true}"#).unwrap();
        assert_eq!(
            p,
            Payload {
                title: Some("x".to_string()),
                completed: Some(true)
            }
        );
    }

    #[test]
    fn decode_object_rejects_non_objects() {
        for body in [
            &br#"["Renamed", true]"#[..],
            br#"[null, true]"#,
            b"true",
            b"null",
            b"12",
            br#""title""#,
        ] {
            assert!(
                decode_object::<Payload>(body).is_err(),
                "expected {:?} to be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn decode_object_rejects_trailing_data() {
        assert!(decode_object::<Payload>(br#"{"completed":true}{}"#).is_err());
    }
}
