use {
    crate::{arguments::Config, metrics::TrackingFailures},
    model::{PurchaseRejected, RejectionCode, TicketRequest, TicketType},
    std::sync::Arc,
};

/// Reserves seats for an account. The implementation is an external
/// collaborator treated as a black box; whatever error it returns is
/// opaque to the core.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait SeatReserving: Send + Sync {
    fn reserve_seat(&self, account_id: i64, seat_count: u64) -> anyhow::Result<()>;
}

/// Takes payment for an account. Same contract as [`SeatReserving`].
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait PaymentProcessing: Send + Sync {
    fn make_payment(&self, account_id: i64, amount: u64) -> anyhow::Result<()>;
}

/// Validates and processes ticket purchases for accounts.
pub struct TicketService {
    seat_reservation: Arc<dyn SeatReserving>,
    payments: Arc<dyn PaymentProcessing>,
    counters: Arc<dyn TrackingFailures>,
    config: Config,
}

impl TicketService {
    pub fn new(
        seat_reservation: Arc<dyn SeatReserving>,
        payments: Arc<dyn PaymentProcessing>,
        counters: Arc<dyn TrackingFailures>,
        config: Config,
    ) -> Self {
        Self {
            seat_reservation,
            payments,
            counters,
            config,
        }
    }

    /// Validates and processes one ticket purchase.
    ///
    /// The business rules run in a fixed order and the first violated rule
    /// aborts the call before any collaborator is invoked. Once the order
    /// is valid the payable amount and the seats to allocate are
    /// aggregated, seats are reserved and payment is taken, in that order;
    /// payment is never attempted after a failed reservation.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseRejected> {
        tracing::info!(account_id, "ticket purchase requested");
        tracing::debug!(account_id, "validating ticket requests");
        self.validate(account_id, requests)?;

        let (total_amount, total_seats) = self.order_totals(requests);

        tracing::debug!(account_id, total_seats, "proceeding with seat reservation");
        if let Err(err) = self.seat_reservation.reserve_seat(account_id, total_seats) {
            tracing::error!(account_id, ?err, "seat reservation failed");
            self.counters.processing_failure();
            return Err(PurchaseRejected::new(
                RejectionCode::UnknownError,
                format!("seat reservation failed for account id {account_id}"),
            ));
        }
        tracing::info!(account_id, "seat reservation successful");

        tracing::debug!(account_id, total_amount, "proceeding with payment");
        if let Err(err) = self.payments.make_payment(account_id, total_amount) {
            tracing::error!(account_id, ?err, "payment failed");
            self.counters.processing_failure();
            return Err(PurchaseRejected::new(
                RejectionCode::UnknownError,
                format!("payment failed for account id {account_id}"),
            ));
        }
        tracing::info!(account_id, "payment successful");

        Ok(())
    }

    fn validate(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseRejected> {
        self.check_business_rules(account_id, requests)
            .inspect_err(|err| {
                tracing::error!(account_id, %err, "purchase rejected");
                self.counters.business_failure();
            })
    }

    fn check_business_rules(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseRejected> {
        if account_id <= 0 {
            return Err(PurchaseRejected::new(
                RejectionCode::InvalidAccount,
                format!("account id {account_id} is not valid"),
            ));
        }
        if requests.is_empty() {
            return Err(PurchaseRejected::new(
                RejectionCode::EmptyRequest,
                "no tickets requested",
            ));
        }
        // `TicketRequest::new` already refuses zero counts but the whole
        // list is still screened here.
        if requests.iter().any(|request| request.count() == 0) {
            return Err(PurchaseRejected::new(
                RejectionCode::EmptyRequest,
                "a request for zero tickets is present",
            ));
        }
        let limit = self.config.max_tickets_allowed;
        if non_infant_ticket_count(requests) > limit {
            return Err(PurchaseRejected::new(
                RejectionCode::LimitExceeded,
                format!("ticket count exceeds the purchase limit of {limit}"),
            ));
        }
        let adults = ticket_count(requests, TicketType::Adult);
        if adults == 0 {
            return Err(PurchaseRejected::new(
                RejectionCode::NoAdult,
                format!("no adult ticket present for account id {account_id}"),
            ));
        }
        if ticket_count(requests, TicketType::Infant) > adults {
            return Err(PurchaseRejected::new(
                RejectionCode::NoAdult,
                format!("more infant than adult tickets for account id {account_id}"),
            ));
        }
        Ok(())
    }

    /// Total payable amount and seats to allocate for a validated order.
    /// Infants pay the configured infant price but occupy no seat.
    fn order_totals(&self, requests: &[TicketRequest]) -> (u64, u64) {
        requests
            .iter()
            .fold((0, 0), |(amount, seats), request| {
                let count = u64::from(request.count());
                let seat = if request.ticket_type().is_infant() {
                    0
                } else {
                    count
                };
                (
                    amount + self.config.price(request.ticket_type()) * count,
                    seats + seat,
                )
            })
    }
}

fn ticket_count(requests: &[TicketRequest], ticket_type: TicketType) -> u64 {
    requests
        .iter()
        .filter(|request| request.ticket_type() == ticket_type)
        .map(|request| u64::from(request.count()))
        .sum()
}

fn non_infant_ticket_count(requests: &[TicketRequest]) -> u64 {
    requests
        .iter()
        .filter(|request| !request.ticket_type().is_infant())
        .map(|request| u64::from(request.count()))
        .sum()
}
