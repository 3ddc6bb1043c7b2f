//! Observability plumbing shared by the ticketing crates: the global
//! metrics registry and tracing initialization.

pub mod metrics;
pub mod tracing;
