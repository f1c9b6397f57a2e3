//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod conversation_repo;
pub mod document_repo;
pub mod session_repo;
pub mod simulation_repo;
pub mod user_repo;

pub use conversation_repo::PostgresConversationRepository;
pub use document_repo::PostgresDocumentRepository;
pub use session_repo::PostgresSessionRepository;
pub use simulation_repo::PostgresSimulationRepository;
pub use user_repo::PostgresUserRepository;
