//! Gazette web server library.
//!
//! Exposes the building blocks (config, state, error handling, views, routes)
//! so integration tests and the binary entrypoint assemble the same app.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;
