//! Session identity resolution
//!
//! The identity of the caller is looked up once per session against the
//! marketplace API and shared by every consumer (the access guard, the
//! sidebar) until login or logout invalidates it.

mod resolver;

pub use resolver::IdentityResolver;

use crate::models::SessionIdentity;

/// Tri-state result of resolving a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    /// The lookup is still in flight
    Loading,
    /// The lookup settled; `None` means the session is not authenticated
    Ready(Option<SessionIdentity>),
    /// The lookup failed; carries the error message
    Failed(String),
}

impl IdentityState {
    pub fn is_loading(&self) -> bool {
        matches!(self, IdentityState::Loading)
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            IdentityState::Ready(identity) => identity.as_ref(),
            _ => None,
        }
    }
}
