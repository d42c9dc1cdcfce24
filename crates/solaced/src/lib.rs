//! Solace daemon library - exposes the web surface for testing.

pub mod routes;
pub mod server;
