//! TeamPulse HTTP server: feedback summaries, attendance streaks and
//! summarizer configuration over a JSON API.

pub mod routes;
pub mod state;
pub mod validate;

pub use routes::build_router;
pub use state::AppState;
