//! Ledger error type.

use thiserror::Error;

use fl_core::{CoreError, LocationId, OrderId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("order {0} not found")]
    UnknownOrder(OrderId),

    #[error("location {0} is not tracked by the ledger")]
    UnknownLocation(LocationId),

    #[error("order {order}: {reason}")]
    InvalidOrder { order: OrderId, reason: String },

    #[error("non-finite change {delta} for order {order} at {location}")]
    NonFiniteDelta {
        location: LocationId,
        order:    OrderId,
        delta:    f64,
    },

    /// Allocated plus onboard fraction drifted away from 1.
    #[error("order {order} sums to {total}, expected 1")]
    ConservationViolated { order: OrderId, total: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
