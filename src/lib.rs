//! # Postmark Client
//! Asynchronous, typed wrapper around the Postmark transactional email HTTP API: send messages and manage bounces and templates with [`ServerClient`], administer servers and sending domains with [`AccountClient`].
//!
//! ## Audience and uses
//! For Rust services that deliver transactional mail through Postmark. Build a client from an API token, optionally override connection options with [`ClientOptionsOverrides`], then call the typed endpoint methods.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Requests are logged through `tracing` spans; tokens are never logged.
//!
//! ## Out of scope
//! No retries, caching, rate limiting, or local state. A failed call is reported once and never re-sent.
//!
//! ## Errors
//! Every failure is exactly one [`Error`] variant: [`Error::Configuration`] at construction time, a status-based classification (e.g. [`Error::InvalidApiKey`] for 401, [`Error::ApiInput`] for 422) for non-2xx responses, or [`Error::Service`] when no response was received. [`Error::kind`] gives a `Copy` discriminator.
//!
//! ## Example
//! ```no_run
//! use postmark_client::{ClientOptionsOverrides, CompletionExt, Message, ServerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_client::Error> {
//!     let client = ServerClient::with_options(
//!         "server-token",
//!         ClientOptionsOverrides::new().timeout(10),
//!     )?;
//!
//!     let message = Message::new("sender@example.com", "receiver@example.com", "Hello")
//!         .with_text_body("Hi there");
//!     let sent = client
//!         .send_email(&message)
//!         .on_complete(|outcome| println!("send finished: ok={}", outcome.is_ok()))
//!         .await?;
//!     println!("Sent: {:?}", sent.message_id);
//!     Ok(())
//! }
//! ```

mod account;
mod callback;
mod client;
mod config;
mod error;
mod error_handler;
pub mod models;
mod server;

pub use account::AccountClient;
pub use callback::{Callback, CompletionExt};
pub use client::{ACCOUNT_TOKEN_HEADER, BaseClient, SERVER_TOKEN_HEADER};
pub use config::{
    ClientOptions, ClientOptionsOverrides, DEFAULT_REQUEST_HOST, DEFAULT_TIMEOUT_SECS,
    default_options, set_default_options,
};
pub use error::{Error, ErrorKind, InputErrorReason};
pub use error_handler::{ApiErrorBody, classify};
pub use models::{Message, MessageSendingResponse};
pub use server::ServerClient;

/// Result type alias for Postmark operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
