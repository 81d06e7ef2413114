//! An interface for handling text completion requests
//!
//! This crate provides the `Prompt` sent to a completion backend, the builder
//! producing the recipe prompt, and a `RequestHandler` trait so the web layer
//! does not depend on any particular backend.

mod error;
pub use error::UpstreamError;
mod prompt;
pub use prompt::{build_prompt, Message, Prompt, Role, PANTRY_STAPLES, SYSTEM_INSTRUCTION};

use tokio::sync::oneshot::Sender;

/// Outcome of a completion: the generated text, verbatim.
pub type CompletionResult = Result<String, UpstreamError>;

pub trait RequestHandler {
    /// Sends `prompt` to the backend. The outcome is delivered on `result`
    /// once the call finishes; the caller awaits the matching receiver.
    fn answer_request(&self, prompt: Prompt, result: Sender<CompletionResult>);
}
