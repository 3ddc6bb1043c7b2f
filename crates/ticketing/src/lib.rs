//! Core purchase validation and processing for the cinema ticketing
//! system.
//!
//! [`service::TicketService`] validates a purchase order against the
//! business rules, aggregates the payable amount and the seats to
//! allocate, and dispatches to the injected seat reservation and payment
//! collaborators. Failures are tracked on two prometheus counters, one
//! for business-rule rejections and one for collaborator failures.
//!
//! Hosts parse [`arguments::Arguments`] once at startup, initialize
//! `observe::tracing` with its `log_filter` and hand the resulting
//! [`arguments::Config`] to the service.

pub mod arguments;
pub mod metrics;
pub mod service;

pub use service::{PaymentProcessing, SeatReserving, TicketService};
