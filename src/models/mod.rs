//! Domain models
//!
//! Records exchanged with the marketplace API and the console's own
//! identity snapshot.

pub mod dashboard;
pub mod envelope;
pub mod item;
pub mod user;

pub use dashboard::*;
pub use envelope::*;
pub use item::*;
pub use user::*;
