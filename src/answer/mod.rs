//! Answer backends.
//!
//! The `/ask` handler only knows the [`Answerer`] trait; which backend sits
//! behind it is chosen once at startup from configuration.

mod bridge;
mod local;
mod remote;

pub use bridge::BridgeAnswerer;
pub use local::LocalAnswerer;
pub use remote::RemoteAnswerer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerError {
    /// The local answerer found no context sentence sharing a term with the question.
    #[error("no sentence in the context matches the question")]
    NoMatch,

    /// Bridge backend configured without a command.
    #[error("answer command is missing")]
    MissingCommand,

    /// Bridge or remote backend exceeded its timeout.
    #[error("answer backend timed out")]
    Timeout,

    /// The bridge command could not be started.
    #[error("failed to execute answer command: {0}")]
    Spawn(#[source] std::io::Error),

    /// The bridge command exited unsuccessfully.
    #[error("answer command exited with code {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    /// The bridge command printed nothing but whitespace.
    #[error("answer command produced empty output")]
    EmptyOutput,

    /// Transport failure or undecodable body from the remote backend.
    #[error("failed to reach answer backend: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote backend answered with a non-2xx status.
    #[error("answer backend returned {status}: {body}")]
    Backend { status: u16, body: String },
}

#[async_trait]
pub trait Answerer: Send + Sync {
    /// Produce an answer to `question` using `context` as the source text.
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError>;

    /// Short backend name reported by the health endpoint.
    fn name(&self) -> &'static str;
}
