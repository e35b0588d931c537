//! Classification of failed HTTP exchanges into [`Error`] values.
//!
//! The HTTP status is the primary discriminator; the JSON body, when Postmark
//! sends one, supplies the `ErrorCode` and a human-readable `Message`.

use crate::Error;
use serde::Deserialize;

/// Error payload Postmark returns with non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiErrorBody {
    pub error_code: i64,
    pub message: Option<String>,
}

/// Map a status code and optional API error payload to one [`Error`].
pub fn classify(status_code: u16, body: Option<&ApiErrorBody>) -> Error {
    let error_code = body.map_or(0, |b| b.error_code);
    let message = body
        .and_then(|b| b.message.clone())
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status_code}"));

    match status_code {
        401 => Error::InvalidApiKey {
            message,
            error_code,
            status_code,
        },
        422 => Error::ApiInput {
            message,
            error_code,
            status_code,
        },
        500 => Error::InternalServer {
            message,
            error_code,
            status_code,
        },
        503 => Error::ServiceUnavailable {
            message,
            error_code,
            status_code,
        },
        400..=499 => Error::Request {
            message,
            error_code,
            status_code,
        },
        _ => Error::Unknown {
            message,
            error_code,
            status_code,
        },
    }
}

/// Classify a non-2xx response from its status and raw body text.
///
/// Bodies that are not Postmark's error JSON are ignored.
pub(crate) fn from_response(status_code: u16, text: &str) -> Error {
    let body = serde_json::from_str::<ApiErrorBody>(text).ok();
    classify(status_code, body.as_ref())
}

/// Classify a non-2xx response whose body may not have been readable.
///
/// The status alone still decides the kind when the body is lost.
pub(crate) fn from_status_body(status_code: u16, body: reqwest::Result<String>) -> Error {
    from_response(status_code, &body.unwrap_or_default())
}

/// Classify a failure that produced no HTTP response.
pub(crate) fn from_transport(error: reqwest::Error) -> Error {
    let message = if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    };
    Error::service(message, Some(Box::new(error)))
}

/// A 2xx response whose body did not match the expected shape.
pub(crate) fn from_decode(error: serde_json::Error) -> Error {
    Error::service(
        format!("failed to decode response body: {error}"),
        Some(Box::new(error)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn body(code: i64, message: &str) -> ApiErrorBody {
        ApiErrorBody {
            error_code: code,
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn status_table_is_exact() {
        let cases = [
            (401, ErrorKind::InvalidApiKey),
            (422, ErrorKind::ApiInput),
            (500, ErrorKind::InternalServer),
            (503, ErrorKind::ServiceUnavailable),
            (400, ErrorKind::Request),
            (404, ErrorKind::Request),
            (408, ErrorKind::Request),
            (413, ErrorKind::Request),
            (429, ErrorKind::Request),
            (502, ErrorKind::Unknown),
            (505, ErrorKind::Unknown),
            (302, ErrorKind::Unknown),
        ];

        for (status, kind) in cases {
            let err = classify(status, None);
            assert_eq!(err.kind(), kind, "status {status}");
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[test]
    fn api_message_and_code_are_kept() {
        let err = classify(422, Some(&body(300, "Invalid 'From' address.")));

        assert_eq!(err.kind(), ErrorKind::ApiInput);
        assert!(err.message().contains("Invalid 'From' address."));
        assert_eq!(err.error_code(), Some(300));
    }

    #[test]
    fn missing_message_falls_back_to_status() {
        let err = classify(500, Some(&ApiErrorBody::default()));
        assert_eq!(err.message(), "Request failed with status code 500");
        assert_eq!(err.error_code(), Some(0));
    }

    #[test]
    fn response_text_is_parsed_when_json() {
        let err = from_response(
            401,
            r#"{"ErrorCode":10,"Message":"No Account or Server API tokens were supplied in the HTTP headers."}"#,
        );
        assert_eq!(err.kind(), ErrorKind::InvalidApiKey);
        assert_eq!(err.error_code(), Some(10));
        assert!(err.message().starts_with("No Account or Server API tokens"));

        let err = from_response(503, "<html>down for maintenance</html>");
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.message(), "Request failed with status code 503");
    }

    #[test]
    fn unreadable_error_body_keeps_status() {
        let read_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();

        let err = from_status_body(422, Err(read_error));

        assert_eq!(err.kind(), ErrorKind::ApiInput);
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.error_code(), Some(0));
        assert_eq!(err.message(), "Request failed with status code 422");
    }
}
