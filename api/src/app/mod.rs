//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod account_service;
pub mod chat_service;
pub mod document_service;
pub mod simulation_service;

pub use account_service::AccountService;
pub use chat_service::ChatService;
pub use document_service::DocumentService;
pub use simulation_service::{SimulationInput, SimulationService};
