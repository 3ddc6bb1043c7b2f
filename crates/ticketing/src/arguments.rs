use {
    model::TicketType,
    std::fmt::{self, Display, Formatter},
};

/// Command line and environment configuration for the ticketing service.
/// Every flag can also be supplied through the equally named environment
/// variable.
#[derive(clap::Parser, Debug)]
pub struct Arguments {
    /// Price of a single ADULT ticket.
    #[clap(long, env, default_value = "25")]
    pub adult_ticket_price: u64,

    /// Price of a single CHILD ticket.
    #[clap(long, env, default_value = "15")]
    pub child_ticket_price: u64,

    /// Price of a single INFANT ticket. Infants sit on an adult's lap and
    /// go free by default.
    #[clap(long, env, default_value = "0")]
    pub infant_ticket_price: u64,

    /// Maximum number of seat-occupying (non-infant) tickets a single
    /// purchase may contain.
    #[clap(long, env, default_value = "25")]
    pub max_tickets_allowed: u64,

    /// Filter directives for the tracing subscriber.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,
}

impl Arguments {
    pub fn into_config(self) -> Config {
        Config {
            adult_ticket_price: self.adult_ticket_price,
            child_ticket_price: self.child_ticket_price,
            infant_ticket_price: self.infant_ticket_price,
            max_tickets_allowed: self.max_tickets_allowed,
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            adult_ticket_price,
            child_ticket_price,
            infant_ticket_price,
            max_tickets_allowed,
            log_filter,
        } = self;

        writeln!(f, "adult_ticket_price: {adult_ticket_price}")?;
        writeln!(f, "child_ticket_price: {child_ticket_price}")?;
        writeln!(f, "infant_ticket_price: {infant_ticket_price}")?;
        writeln!(f, "max_tickets_allowed: {max_tickets_allowed}")?;
        writeln!(f, "log_filter: {log_filter}")?;
        Ok(())
    }
}

/// Immutable pricing and limit configuration. Populated once at startup
/// and passed into the service by value; nothing reads ambient state at
/// purchase time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub adult_ticket_price: u64,
    pub child_ticket_price: u64,
    pub infant_ticket_price: u64,
    pub max_tickets_allowed: u64,
}

impl Config {
    pub fn price(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult_ticket_price,
            TicketType::Child => self.child_ticket_price,
            TicketType::Infant => self.infant_ticket_price,
        }
    }
}

impl Default for Config {
    /// The documented fallback defaults: ADULT=25, CHILD=15, INFANT=0 and
    /// at most 25 seat-occupying tickets per purchase.
    fn default() -> Self {
        Self {
            adult_ticket_price: 25,
            child_ticket_price: 15,
            infant_ticket_price: 0,
            max_tickets_allowed: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    #[test]
    fn defaults_match_documented_fallbacks() {
        let arguments = Arguments::try_parse_from(["ticketing"]).unwrap();
        assert_eq!(arguments.log_filter, "info");
        assert_eq!(arguments.into_config(), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let arguments = Arguments::try_parse_from([
            "ticketing",
            "--adult-ticket-price=30",
            "--child-ticket-price=20",
            "--infant-ticket-price=5",
            "--max-tickets-allowed=10",
            "--log-filter=debug",
        ])
        .unwrap();
        assert_eq!(arguments.log_filter, "debug");

        let config = arguments.into_config();
        assert_eq!(config.adult_ticket_price, 30);
        assert_eq!(config.child_ticket_price, 20);
        assert_eq!(config.infant_ticket_price, 5);
        assert_eq!(config.max_tickets_allowed, 10);
    }

    #[test]
    fn price_maps_every_ticket_type() {
        let config = Config::default();
        let expected = [25, 15, 0];
        for (ticket_type, price) in TicketType::ALL.into_iter().zip(expected) {
            assert_eq!(config.price(ticket_type), price);
        }
    }

    #[test]
    fn display_lists_all_values() {
        let arguments = Arguments::try_parse_from(["ticketing"]).unwrap();
        let rendered = arguments.to_string();
        assert!(rendered.contains("adult_ticket_price: 25"));
        assert!(rendered.contains("max_tickets_allowed: 25"));
        assert!(rendered.contains("log_filter: info"));
    }
}
