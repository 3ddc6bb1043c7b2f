use prometheus::IntCounter;

/// Counter seam used by [`crate::TicketService`]. Keeping this behind a
/// trait means the service can be tested without a real metrics backend.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait TrackingFailures: Send + Sync {
    /// A purchase was refused by a business rule.
    fn business_failure(&self);

    /// A collaborator failed while processing an already validated
    /// purchase.
    fn processing_failure(&self);
}

/// The prometheus backing for [`TrackingFailures`]. Hosts that configure
/// the registry with the `cinema_ticket` prefix export these as
/// `cinema_ticket_failure_events_total` and
/// `cinema_ticket_business_failure_events_total`.
#[derive(prometheus_metric_storage::MetricStorage, Clone, Debug)]
pub struct Metrics {
    /// Total count of failures.
    failure_events_total: IntCounter,

    /// Total count of business rule failures.
    business_failure_events_total: IntCounter,
}

impl Metrics {
    pub fn get() -> &'static Self {
        Metrics::instance(observe::metrics::get_storage_registry())
            .expect("unexpected error getting metrics instance")
    }
}

impl TrackingFailures for Metrics {
    fn business_failure(&self) {
        self.business_failure_events_total.inc();
    }

    fn processing_failure(&self) {
        self.failure_events_total.inc();
    }
}
