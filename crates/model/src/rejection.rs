//! The single error family surfaced to callers of the purchase flow.

use std::fmt::{self, Display, Formatter};

/// Stable category of a purchase rejection.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub enum RejectionCode {
    /// A collaborator (seat reservation or payment) failed.
    UnknownError,
    InvalidAccount,
    LimitExceeded,
    /// Covers both a missing adult ticket and more infants than adults.
    NoAdult,
    EmptyRequest,
}

impl Display for RejectionCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Self::UnknownError => "UnknownError",
            Self::InvalidAccount => "InvalidAccount",
            Self::LimitExceeded => "LimitExceeded",
            Self::NoAdult => "NoAdult",
            Self::EmptyRequest => "EmptyRequest",
        };
        f.write_str(name)
    }
}

/// Why a purchase was refused. Carries the rejection category together
/// with a human-readable detail message.
#[derive(Eq, PartialEq, Clone, Debug, thiserror::Error)]
#[error("{code}: {detail}")]
pub struct PurchaseRejected {
    code: RejectionCode,
    detail: String,
}

impl PurchaseRejected {
    pub fn new(code: RejectionCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> RejectionCode {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
