//! Console pages
//!
//! Each [`View`] resolves to exactly one GET handler. The mapping is fixed
//! at startup when the router registers the navigation entries.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::routing::{get, MethodRouter};

use crate::{navigation::View, state::AppState};

impl View {
    /// Handler serving this view
    pub fn method_router(self) -> MethodRouter<AppState> {
        match self {
            View::Analytics => get(handler::analytics),
            View::ManageUsers => get(handler::manage_users),
            View::ManageItems => get(handler::manage_items),
            View::Profile => get(handler::profile),
        }
    }
}
