//! Landing page HTTP service.
//!
//! Wires the CMS and record clients into an Axum router. Serves normalized
//! insight previews, the hero cover, and the lead submission proxy as JSON
//! for the presentation layer.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
