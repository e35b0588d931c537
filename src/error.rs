//! Error types for the Postmark client.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// API error code for a malformed send request.
const INVALID_EMAIL_REQUEST_CODE: i64 = 300;
/// API error code for a send that targeted inactive recipients.
const INACTIVE_RECIPIENTS_CODE: i64 = 406;

static INACTIVE_ADDRESSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Found inactive addresses: (.+?)\.\s").expect("static regex is valid")
});

#[derive(Debug, Error)]
/// Error type for all Postmark client operations.
///
/// Each failed call yields exactly one of these. Use [`Error::kind`] to branch
/// on the classification without matching every field.
pub enum Error {
    /// The client was constructed with invalid settings (e.g. an empty token).
    #[error("{0}")]
    Configuration(String),
    /// The API rejected the credential (HTTP 401).
    #[error("{message}")]
    InvalidApiKey {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// The API rejected the request payload (HTTP 422).
    #[error("{message}")]
    ApiInput {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// The API failed internally (HTTP 500).
    #[error("{message}")]
    InternalServer {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// The API is temporarily unavailable (HTTP 503).
    #[error("{message}")]
    ServiceUnavailable {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// Any other 4xx response.
    #[error("{message}")]
    Request {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// A status the client has no classification for.
    #[error("{message}")]
    Unknown {
        message: String,
        error_code: i64,
        status_code: u16,
    },
    /// No usable response: connection failure, timeout, or an undecodable body.
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

/// Stable discriminator for [`Error`], convenient for `match` and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Configuration`].
    Configuration,
    /// HTTP 401.
    InvalidApiKey,
    /// HTTP 422.
    ApiInput,
    /// HTTP 500.
    InternalServer,
    /// HTTP 503.
    ServiceUnavailable,
    /// Other 4xx statuses.
    Request,
    /// Any status outside the classified ranges.
    Unknown,
    /// No response, or a 2xx body that could not be decoded.
    Service,
}

impl ErrorKind {
    /// Snake-case name of the kind, as used in log fields.
    ///
    /// # Examples
    /// ```
    /// use postmark_client::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::InvalidApiKey.as_str(), "invalid_api_key");
    /// assert_eq!(ErrorKind::Service.to_string(), "service");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::InvalidApiKey => "invalid_api_key",
            ErrorKind::ApiInput => "api_input",
            ErrorKind::InternalServer => "internal_server",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Request => "request",
            ErrorKind::Unknown => "unknown",
            ErrorKind::Service => "service",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer detail for [`Error::ApiInput`], derived from the API error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorReason {
    /// Error code 300: the message itself is malformed (bad address, missing body, ...).
    InvalidEmailRequest,
    /// Addresses that previously hard-bounced, complained, or were suppressed.
    InactiveRecipients(Vec<String>),
    /// Any other 422 error code.
    Other,
}

impl Error {
    /// Build a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Build a transport-level error that has no HTTP response.
    pub fn service(message: impl Into<String>, source: Option<BoxError>) -> Self {
        Error::Service {
            message: message.into(),
            source,
        }
    }

    /// Which variant this is, without its payload.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{ErrorKind, Message, ServerClient};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = ServerClient::new("server-token")?;
    /// let message = Message::new("from@example.com", "to@example.com", "Hi");
    /// match client.send_email(&message).await {
    ///     Ok(sent) => println!("sent {:?}", sent.message_id),
    ///     Err(e) if e.kind() == ErrorKind::ServiceUnavailable => eprintln!("try later"),
    ///     Err(e) => return Err(e),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::InvalidApiKey { .. } => ErrorKind::InvalidApiKey,
            Error::ApiInput { .. } => ErrorKind::ApiInput,
            Error::InternalServer { .. } => ErrorKind::InternalServer,
            Error::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
            Error::Request { .. } => ErrorKind::Request,
            Error::Unknown { .. } => ErrorKind::Unknown,
            Error::Service { .. } => ErrorKind::Service,
        }
    }

    /// Human-readable description; the same text `Display` prints.
    ///
    /// For HTTP errors this is Postmark's `Message`, or
    /// `Request failed with status code <status>` when the body had none.
    pub fn message(&self) -> &str {
        match self {
            Error::Configuration(message) => message,
            Error::InvalidApiKey { message, .. }
            | Error::ApiInput { message, .. }
            | Error::InternalServer { message, .. }
            | Error::ServiceUnavailable { message, .. }
            | Error::Request { message, .. }
            | Error::Unknown { message, .. }
            | Error::Service { message, .. } => message,
        }
    }

    /// HTTP status of the failed exchange, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::InvalidApiKey { status_code, .. }
            | Error::ApiInput { status_code, .. }
            | Error::InternalServer { status_code, .. }
            | Error::ServiceUnavailable { status_code, .. }
            | Error::Request { status_code, .. }
            | Error::Unknown { status_code, .. } => Some(*status_code),
            Error::Configuration(_) | Error::Service { .. } => None,
        }
    }

    /// Postmark's own `ErrorCode` (0 when the response carried none).
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Error::InvalidApiKey { error_code, .. }
            | Error::ApiInput { error_code, .. }
            | Error::InternalServer { error_code, .. }
            | Error::ServiceUnavailable { error_code, .. }
            | Error::Request { error_code, .. }
            | Error::Unknown { error_code, .. } => Some(*error_code),
            Error::Configuration(_) | Error::Service { .. } => None,
        }
    }

    /// Detail for input-validation errors; `None` for every other kind.
    pub fn input_reason(&self) -> Option<InputErrorReason> {
        let Error::ApiInput {
            message,
            error_code,
            ..
        } = self
        else {
            return None;
        };

        Some(match *error_code {
            INVALID_EMAIL_REQUEST_CODE => InputErrorReason::InvalidEmailRequest,
            INACTIVE_RECIPIENTS_CODE => {
                InputErrorReason::InactiveRecipients(parse_inactive_recipients(message))
            }
            _ => InputErrorReason::Other,
        })
    }
}

fn parse_inactive_recipients(message: &str) -> Vec<String> {
    INACTIVE_ADDRESSES
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_error(error_code: i64, message: &str) -> Error {
        Error::ApiInput {
            message: message.to_string(),
            error_code,
            status_code: 422,
        }
    }

    #[test]
    fn inactive_recipients_are_extracted() {
        let err = input_error(
            406,
            "You tried to send to recipient(s) that have been marked as inactive. \
             Found inactive addresses: a@example.com, b@example.com. \
             Inactive recipients are ones that have generated a hard bounce.",
        );

        assert_eq!(
            err.input_reason(),
            Some(InputErrorReason::InactiveRecipients(vec![
                "a@example.com".to_string(),
                "b@example.com".to_string(),
            ]))
        );
    }

    #[test]
    fn input_reason_by_code() {
        assert_eq!(
            input_error(300, "Invalid email request").input_reason(),
            Some(InputErrorReason::InvalidEmailRequest)
        );
        assert_eq!(
            input_error(1, "whatever").input_reason(),
            Some(InputErrorReason::Other)
        );
        assert_eq!(Error::configuration("x").input_reason(), None);
    }

    #[test]
    fn accessors_on_transport_errors() {
        let err = Error::service("connection refused", None);
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.status_code(), None);
        assert_eq!(err.error_code(), None);
        assert_eq!(err.to_string(), "connection refused");
    }
}
