//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. The public wire format uses
//! the Portuguese field names the frontend depends on.

pub mod auth;
pub mod chatbot;
pub mod documents;
pub mod simulation;

pub use auth::{login, logout, me, register};
pub use chatbot::{chat_history, post_message};
pub use documents::{list_documents, upload_document};
pub use simulation::{calculate, simulation_history};

/// Treat missing and blank strings alike (the frontend sends both)
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
