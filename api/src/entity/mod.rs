//! SeaORM table models backing the PostgreSQL adapters.

pub mod conversations;
pub mod documents;
pub mod sessions;
pub mod simulations;
pub mod users;
