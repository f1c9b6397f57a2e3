//! Text generation port trait
//!
//! Defines the interface for the generative-AI model the chatbot and the
//! document analyzer talk to.

use async_trait::async_trait;

use crate::error::AiError;

/// A client capable of producing a text completion for a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
