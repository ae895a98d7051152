//! Zone-subsystem error type.

use thiserror::Error;

use fl_core::{CoreError, ZoneId};

/// Errors produced by `fl-zones`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZoneError {
    /// A zone name was referenced that the map does not define.  Callers
    /// computing travel time treat this as "no speed override".
    #[error("zone {0} not found")]
    MissingZoneData(ZoneId),

    #[error("zone {zone} is degenerate: {reason}")]
    DegenerateZone { zone: ZoneId, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
