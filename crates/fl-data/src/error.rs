//! Dataset loading errors.

use thiserror::Error;

use fl_core::{CoreError, LocationId, VehicleId};
use fl_ledger::LedgerError;
use fl_vehicle::VehicleError;
use fl_zones::ZoneError;

/// A dataset could not be turned into a round.  Always fatal for the round.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {what} document: {source}")]
    Io {
        what:   &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {what} document: {source}")]
    Json {
        what:   &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("order {order}: {source}")]
    Deadline {
        order:  String,
        #[source]
        source: CoreError,
    },

    #[error("vehicle {vehicle} is stationed at unknown point {home}")]
    UnknownHome { vehicle: VehicleId, home: LocationId },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type DataResult<T> = Result<T, DataError>;
