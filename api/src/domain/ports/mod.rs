//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod ai;
pub mod repositories;
pub mod storage;

pub use ai::TextGenerator;
pub use repositories::{
    ConversationRepository, DocumentRepository, SessionRepository, SimulationRepository,
    UserRepository,
};
pub use storage::DocumentStore;
