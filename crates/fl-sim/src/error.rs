use thiserror::Error;

use fl_core::VehicleId;
use fl_ledger::LedgerError;
use fl_plan::PlanError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("route assigned to unknown vehicle {0}")]
    UnknownVehicle(VehicleId),

    /// A stop failed for a reason other than missing stock.
    #[error("vehicle {vehicle}: {source}")]
    Stop {
        vehicle: VehicleId,
        #[source]
        source:  PlanError,
    },

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type SimResult<T> = Result<T, SimError>;
