//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod conversation;
pub mod document;
pub mod session;
pub mod simulation;
pub mod user;

pub use conversation::{Conversation, ConversationId, NewConversation};
pub use document::{Document, DocumentId, DocumentStatus, NewDocument};
pub use session::{NewSession, Session, SessionId};
pub use simulation::{NewSimulation, Simulation, SimulationId};
pub use user::{NewUser, User, UserId};
