//! Authentication
//!
//! Bearer session-token middleware for the protected routes.

pub mod session;

pub use session::{auth_middleware, optional_auth_middleware, SessionIdentity};
