//! Shared request dispatch for the account and server clients.

use crate::config::{ClientOptions, ClientOptionsOverrides};
use crate::{Error, Result, error_handler};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{Span, debug, instrument, warn};

/// Header carrying a server-level API token.
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
/// Header carrying an account-level API token.
pub const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

const LIBRARY_NAME: &str = env!("CARGO_PKG_NAME");
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query value for endpoints that take no parameters.
pub(crate) const NO_QUERY: &[(&str, &str)] = &[];

// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a caller-supplied value for use as one path segment.
pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// API token together with the header it travels in.
///
/// Never printed: `Debug` only shows the header name.
#[derive(Clone)]
struct Credential {
    header: HeaderName,
    token: HeaderValue,
}

impl Credential {
    fn new(token: &str, header: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::configuration("A valid API token must be provided."));
        }

        let header = HeaderName::from_bytes(header.as_bytes())
            .map_err(|e| Error::configuration(format!("invalid auth header name: {e}")))?;
        let mut token = HeaderValue::from_str(token).map_err(|_| {
            Error::configuration("API token contains characters not allowed in an HTTP header.")
        })?;
        token.set_sensitive(true);

        Ok(Self { header, token })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("header", &self.header)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Request plumbing shared by [`crate::AccountClient`] and [`crate::ServerClient`].
///
/// Owns the credential, the connection options, and the underlying
/// `reqwest::Client`. Every call goes through [`BaseClient::dispatch`].
#[derive(Debug, Clone)]
pub struct BaseClient {
    http: reqwest::Client,
    credential: Credential,
    options: ClientOptions,
    client_version: String,
}

impl BaseClient {
    /// Create a client sending `token` under the `auth_header` header.
    ///
    /// `overrides` are merged over the process-wide defaults as they are right now.
    ///
    /// # Errors
    /// [`Error::Configuration`] if the token is empty or whitespace, or cannot
    /// be sent as a header value. No network activity happens here.
    pub fn new(token: &str, auth_header: &str, overrides: ClientOptionsOverrides) -> Result<Self> {
        let credential = Credential::new(token, auth_header)?;
        let options = ClientOptions::default().merge(overrides);
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            credential,
            options,
            client_version: CLIENT_VERSION.to_string(),
        })
    }

    /// Connection options used by this client.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Mutable access to this client's options; affects later requests only.
    pub fn options_mut(&mut self) -> &mut ClientOptions {
        &mut self.options
    }

    /// Version reported in the `User-Agent` header.
    pub fn client_version(&self) -> &str {
        &self.client_version
    }

    /// Override the version reported in the `User-Agent` header.
    pub fn set_client_version(&mut self, version: impl Into<String>) {
        self.client_version = version.into();
    }

    /// Name of the header the credential is sent under (lowercased).
    pub fn auth_header(&self) -> &str {
        self.credential.header.as_str()
    }

    /// `scheme://host` every request path is appended to.
    pub fn base_url(&self) -> String {
        self.options.base_url()
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(self.credential.header.clone(), self.credential.token.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent()) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }

    fn user_agent(&self) -> String {
        format!("{LIBRARY_NAME} - {}", self.client_version)
    }

    /// Send a JSON body with no query parameters.
    pub async fn process_request_with_body<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, Some(NO_QUERY), Some(body)).await
    }

    /// Send query parameters only; the request has no body.
    pub async fn process_request_without_body<T, Q>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.dispatch(method, path, Some(query), None::<&()>).await
    }

    /// Issue one request and decode the JSON response.
    ///
    /// Resolves to the decoded body on a 2xx status. Anything else, including
    /// connection failures and timeouts, comes back as a classified [`Error`].
    #[instrument(
        name = "postmark_request",
        skip_all,
        fields(
            http.method = tracing::field::Empty,
            http.path = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn dispatch<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let span = Span::current();
        span.record("http.method", method.as_str());
        span.record("http.path", path);

        let url = format!("{}{}", self.options.base_url(), path);
        let mut request = self
            .http
            .request(method, url)
            .headers(self.headers())
            .timeout(self.options.request_timeout());

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = self.execute(request).await;
        match &result {
            Ok(_) => debug!("request succeeded"),
            Err(e) => warn!(kind = %e.kind(), status = ?e.status_code(), "request failed: {e}"),
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(error_handler::from_transport)?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let body = response.text().await;
            return Err(error_handler::from_status_body(status.as_u16(), body));
        }

        let text = response
            .text()
            .await
            .map_err(error_handler::from_transport)?;
        serde_json::from_str(&text).map_err(error_handler::from_decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn blank_tokens_are_rejected() {
        for token in ["", " ", "\t\n", "   "] {
            let err = BaseClient::new(token, SERVER_TOKEN_HEADER, ClientOptionsOverrides::new())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert_eq!(err.to_string(), "A valid API token must be provided.");
        }
    }

    #[test]
    fn headers_carry_trimmed_token_and_identity() {
        let client = BaseClient::new(
            "  server-token  ",
            SERVER_TOKEN_HEADER,
            ClientOptionsOverrides::new(),
        )
        .unwrap();
        let headers = client.headers();

        assert_eq!(headers.get("x-postmark-server-token").unwrap(), "server-token");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            format!("postmark-client - {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(path_segment("welcome-email_v2.1"), "welcome-email_v2.1");
        assert_eq!(path_segment("12345"), "12345");
        assert_eq!(path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(path_segment("with space"), "with%20space");
    }

    #[test]
    fn debug_output_hides_token() {
        let client =
            BaseClient::new("super-secret", ACCOUNT_TOKEN_HEADER, ClientOptionsOverrides::new())
                .unwrap();
        let rendered = format!("{client:?}");

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("x-postmark-account-token"));
    }

    #[test]
    fn options_can_be_changed_after_construction() {
        let mut client = BaseClient::new(
            "token",
            SERVER_TOKEN_HEADER,
            ClientOptionsOverrides::new()
                .use_https(true)
                .request_host("api.postmarkapp.com"),
        )
        .unwrap();

        client.options_mut().use_https = false;
        client.options_mut().request_host = "example.com".to_string();
        assert_eq!(client.base_url(), "http://example.com");

        client.set_client_version("test");
        assert_eq!(client.client_version(), "test");
        assert_eq!(client.headers().get(USER_AGENT).unwrap(), "postmark-client - test");
    }
}
