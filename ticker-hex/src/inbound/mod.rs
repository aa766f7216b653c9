//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
mod params;
mod server;

pub use server::{API_PATH, HttpServer};
