//! Ticket types and the immutable per-order ticket request value.

use std::fmt::{self, Display, Formatter};

/// The three ticket categories sold by the cinema. Infants sit on an
/// adult's lap, so they occupy no seat and pay nothing.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn is_infant(&self) -> bool {
        matches!(self, Self::Infant)
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        };
        f.write_str(name)
    }
}

/// One (type, count) line of a purchase order.
///
/// Constructed once and read-only afterwards. A zero count is rejected at
/// construction time so a well-formed request always stands for at least
/// one ticket.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidTicketRequest {
    #[error("ticket count must be a positive integer")]
    NonPositiveCount,
}

impl TicketRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, InvalidTicketRequest> {
        if count == 0 {
            return Err(InvalidTicketRequest::NonPositiveCount);
        }
        Ok(Self { ticket_type, count })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_positive_count() {
        let request = TicketRequest::new(TicketType::Adult, 2).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.count(), 2);
    }

    #[test]
    fn rejects_zero_count() {
        for ticket_type in TicketType::ALL {
            assert!(matches!(
                TicketRequest::new(ticket_type, 0),
                Err(InvalidTicketRequest::NonPositiveCount)
            ));
        }
    }

    #[test]
    fn displays_wire_names() {
        assert_eq!(TicketType::Adult.to_string(), "ADULT");
        assert_eq!(TicketType::Child.to_string(), "CHILD");
        assert_eq!(TicketType::Infant.to_string(), "INFANT");
    }

    #[test]
    fn only_infants_are_infants() {
        assert!(TicketType::Infant.is_infant());
        assert!(!TicketType::Adult.is_infant());
        assert!(!TicketType::Child.is_infant());
    }
}
