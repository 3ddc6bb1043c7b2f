//! Domain value types shared by the ticketing crates.

pub mod rejection;
pub mod ticket;

pub use {
    rejection::{PurchaseRejected, RejectionCode},
    ticket::{InvalidTicketRequest, TicketRequest, TicketType},
};
