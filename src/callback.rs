//! Completion callbacks for client calls.
//!
//! Every client method returns a future. [`CompletionExt::on_complete`] wraps
//! that same future so a callback observes the outcome as well, without
//! issuing a second request.

use crate::{Error, Result};
use futures::FutureExt;
use futures::future::Inspect;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::warn;

/// Boxed completion callback, for storing callbacks in structs or collections.
pub type Callback<T> = Box<dyn FnOnce(std::result::Result<&T, &Error>) + Send>;

fn notify<T, F>(callback: F, result: &Result<T>)
where
    F: FnOnce(std::result::Result<&T, &Error>),
{
    let outcome = result.as_ref();
    if catch_unwind(AssertUnwindSafe(move || callback(outcome))).is_err() {
        warn!("completion callback panicked; result is returned unchanged");
    }
}

/// Attach a completion callback to any client call.
///
/// # Examples
/// ```no_run
/// # use postmark_client::{CompletionExt, ServerClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), postmark_client::Error> {
/// let client = ServerClient::new("server-token")?;
/// let server = client
///     .get_server()
///     .on_complete(|outcome| match outcome {
///         Ok(server) => println!("fetched {}", server.name),
///         Err(e) => eprintln!("failed: {e}"),
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub trait CompletionExt<T>: Future<Output = Result<T>> + Sized {
    /// Run `callback` once with the outcome of this call, then yield that
    /// same outcome unchanged.
    ///
    /// # Arguments
    /// * `callback` - Receives `Ok(&value)` on success or `Err(&error)` on failure
    ///
    /// # Returns
    /// A future resolving to exactly what the wrapped call resolves to.
    fn on_complete<F>(self, callback: F) -> Inspect<Self, impl FnOnce(&Result<T>)>
    where
        F: FnOnce(std::result::Result<&T, &Error>),
    {
        self.inspect(move |result: &Result<T>| notify(callback, result))
    }
}

impl<T, Fut> CompletionExt<T> for Fut where Fut: Future<Output = Result<T>> {}
