//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod gemini;
pub mod local_store;
pub mod postgres;

pub use gemini::GeminiClientImpl;
pub use local_store::LocalDocumentStore;
pub use postgres::{
    PostgresConversationRepository, PostgresDocumentRepository, PostgresSessionRepository,
    PostgresSimulationRepository, PostgresUserRepository,
};
