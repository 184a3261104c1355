//! Core library for the landing page.
//!
//! Turns loosely-typed headless CMS payloads into stable, fallback-complete
//! view models and validates lead-capture submissions. Everything in this
//! crate is pure: no I/O, no shared state. The HTTP clients live in
//! `landing-client` and the service in `landing-server`.

pub mod cover;
pub mod date;
pub mod error;
pub mod lead;
pub mod media;
pub mod preview;
pub mod raw;
