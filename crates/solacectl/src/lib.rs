//! Solace console client library - exposes the REPL for testing.

pub mod repl;
