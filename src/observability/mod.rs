//! Observability for the routing core.
//!
//! Routing decisions are traced with structured `tracing` spans and events
//! (one debug span per routed key event, one per navigation). This module
//! provides the subscriber setup; emitting happens inline in the router and
//! navigator.

pub mod init;

pub use init::init_tracing;
