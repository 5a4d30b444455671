//! Web layer for the route tracker.
//!
//! Provides HTTP endpoints for searching routes, managing favorites,
//! and the account flow.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
