//! Step drafts, editing commands and validated steps.

use fl_core::LocationId;
use fl_ledger::{Fractions, InventoryLedger};
use fl_vehicle::Vehicle;

use crate::{apply_operations, CapacityKind, Operation, OperationKind, PlanError, PlanResult};

// ── Editing ───────────────────────────────────────────────────────────────────

/// An edit to a draft's operation list.
#[derive(Clone, Debug, PartialEq)]
pub enum StepCommand {
    /// Append at the end.
    AddOperation(Operation),
    /// Remove the operation at this index.
    RemoveOperation(usize),
    /// Overwrite the operation at this index.
    ReplaceOperation(usize, Operation),
}

/// A stop being composed: a location and an ordered list of operations.
///
/// Drafts are plain values; validating one never consumes or changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct StepDraft {
    location:   LocationId,
    operations: Vec<Operation>,
}

impl StepDraft {
    pub fn new(location: impl Into<LocationId>) -> Self {
        Self { location: location.into(), operations: Vec::new() }
    }

    /// Convenience: a draft with `ops` already added in order.
    pub fn with_operations(location: impl Into<LocationId>, ops: Vec<Operation>) -> Self {
        Self { location: location.into(), operations: ops }
    }

    pub fn location(&self) -> &LocationId {
        &self.location
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Apply one edit.  Out-of-range indices are rejected and leave the
    /// draft unchanged.
    pub fn apply(&mut self, command: StepCommand) -> PlanResult<()> {
        let len = self.operations.len();
        match command {
            StepCommand::AddOperation(op) => self.operations.push(op),
            StepCommand::RemoveOperation(index) => {
                if index >= len {
                    return Err(PlanError::NoSuchOperation { index, len });
                }
                self.operations.remove(index);
            }
            StepCommand::ReplaceOperation(index, op) => {
                let slot = self
                    .operations
                    .get_mut(index)
                    .ok_or(PlanError::NoSuchOperation { index, len })?;
                *slot = op;
            }
        }
        Ok(())
    }

    /// Check this draft against `vehicle`, `ledger` and the vehicle's
    /// current `onboard` content.
    ///
    /// A draft without operations is rejected unless it is at the vehicle's
    /// home point.
    ///
    /// Works on copies.  On success returns the validated [`Step`] together
    /// with the ledger and onboard content as they are after the stop; on
    /// failure the caller's values are untouched.
    pub fn validate(
        &self,
        vehicle: &Vehicle,
        ledger:  &InventoryLedger,
        onboard: &Fractions,
    ) -> PlanResult<Validation> {
        if self.location.is_blank() {
            return Err(PlanError::EmptyLocation);
        }
        // The vehicle's home is the only stop that may be a bare visit: routes
        // start and end there even when nothing is handled.
        if self.operations.is_empty() && self.location != vehicle.home {
            return Err(PlanError::EmptyStep(self.location.clone()));
        }
        if !ledger.tracks(&self.location) {
            return Err(fl_ledger::LedgerError::UnknownLocation(self.location.clone()).into());
        }

        let mut next_ledger = ledger.clone();
        let mut next_onboard = onboard.clone();
        apply_operations(&self.location, &self.operations, &mut next_ledger, &mut next_onboard)?;

        let weight_kg = next_ledger.weight_of(&next_onboard);
        if !vehicle.fits_weight(weight_kg) {
            return Err(PlanError::OverCapacity {
                kind:     CapacityKind::Weight,
                required: weight_kg,
                limit:    vehicle.max_weight_kg,
            });
        }
        let volume_m3 = next_ledger.volume_of(&next_onboard);
        if !vehicle.fits_volume(volume_m3) {
            return Err(PlanError::OverCapacity {
                kind:     CapacityKind::Volume,
                required: volume_m3,
                limit:    vehicle.max_volume_m3,
            });
        }

        let step = Step {
            location:   self.location.clone(),
            operations: self.operations.clone(),
            snapshot:   LoadSnapshot {
                content: next_onboard.clone(),
                weight_kg,
                volume_m3,
            },
        };
        Ok(Validation { step, ledger: next_ledger, onboard: next_onboard })
    }
}

// ── Validated ─────────────────────────────────────────────────────────────────

/// What the vehicle carries when it leaves a stop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadSnapshot {
    pub content:   Fractions,
    pub weight_kg: f64,
    pub volume_m3: f64,
}

/// A stop that passed validation.  Immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    location:   LocationId,
    operations: Vec<Operation>,
    snapshot:   LoadSnapshot,
}

impl Step {
    pub fn location(&self) -> &LocationId {
        &self.location
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn snapshot(&self) -> &LoadSnapshot {
        &self.snapshot
    }

    pub fn has_loads(&self) -> bool {
        self.operations.iter().any(|op| op.kind() == OperationKind::Load)
    }
}

/// Successful validation result: the step plus the state after it.
#[derive(Clone, Debug)]
pub struct Validation {
    pub step:    Step,
    pub ledger:  InventoryLedger,
    pub onboard: Fractions,
}
