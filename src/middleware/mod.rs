//! HTTP middleware

pub mod guard;
pub mod logging;
pub mod session;

pub use guard::{access_guard_middleware, AccessGuard, GuardDecision, RolePolicy};
pub use logging::logging_middleware;
pub use session::{CurrentIdentity, SessionToken};
