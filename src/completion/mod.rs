//! Completion service access
//!
//! The guide talks to the language model through [`CompletionClient`] so that
//! the HTTP implementation can be swapped for a stub in tests.

use async_trait::async_trait;

use crate::Result;
use crate::models::CompletionRequest;

pub mod openai;

pub use openai::OpenAiClient;

/// Sends a chat completion request and returns the text of the first choice.
///
/// Implementations do not retry and do not substitute fallback content: every
/// transport, authentication or decoding failure is returned to the caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
