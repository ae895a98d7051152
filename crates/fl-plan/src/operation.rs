//! Checked load/unload operations and their transactional application.

use std::fmt;

use fl_core::{OrderId, FRACTION_EPSILON};
use fl_ledger::{Fractions, InventoryLedger};

use crate::{PlanError, PlanResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// Location → vehicle.
    Load,
    /// Vehicle → location.
    Unload,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Load => "load",
            OperationKind::Unload => "unload",
        })
    }
}

/// Move `quantity` (a fraction of the whole order) of one order between the
/// stop's location and the vehicle.
///
/// Fields are private: every `Operation` in existence has a non-blank order
/// id and a finite quantity in `(0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    kind:     OperationKind,
    order:    OrderId,
    quantity: f64,
}

impl Operation {
    pub fn new(kind: OperationKind, order: impl Into<OrderId>, quantity: f64) -> PlanResult<Self> {
        let order = order.into();
        if order.is_blank() {
            return Err(PlanError::EmptyOrderRef);
        }
        if !quantity.is_finite() || quantity <= 0.0 || quantity > 1.0 + FRACTION_EPSILON {
            return Err(PlanError::InvalidQuantity { quantity });
        }
        Ok(Self { kind, order, quantity })
    }

    pub fn load(order: impl Into<OrderId>, quantity: f64) -> PlanResult<Self> {
        Self::new(OperationKind::Load, order, quantity)
    }

    pub fn unload(order: impl Into<OrderId>, quantity: f64) -> PlanResult<Self> {
        Self::new(OperationKind::Unload, order, quantity)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn order(&self) -> &OrderId {
        &self.order
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} x{}", self.kind, self.order, self.quantity)
    }
}

/// Apply `ops` in order at `location`, mutating `ledger` and `onboard`.
///
/// Stops at the first operation that cannot be satisfied.  The inputs may be
/// partially modified on error, so callers pass working copies and keep them
/// only on `Ok`.
pub fn apply_operations(
    location: &str,
    ops:      &[Operation],
    ledger:   &mut InventoryLedger,
    onboard:  &mut Fractions,
) -> PlanResult<()> {
    for op in ops {
        // Unknown orders fail here rather than reading as zero stock.
        ledger.order(op.order())?;
        let carried = onboard.entry(op.order.clone()).or_insert(0.0);

        match op.kind {
            OperationKind::Load => {
                let available = ledger.fraction(location, &op.order);
                if available + FRACTION_EPSILON < op.quantity {
                    return Err(PlanError::InsufficientStock {
                        location:  location.into(),
                        order:     op.order.clone(),
                        requested: op.quantity,
                        available,
                    });
                }
                ledger.update(location, &op.order, -op.quantity)?;
                *carried += op.quantity;
            }
            OperationKind::Unload => {
                if *carried + FRACTION_EPSILON < op.quantity {
                    return Err(PlanError::InsufficientOnboard {
                        location:  location.into(),
                        order:     op.order.clone(),
                        requested: op.quantity,
                        onboard:   *carried,
                    });
                }
                ledger.update(location, &op.order, op.quantity)?;
                *carried = (*carried - op.quantity).max(0.0);
            }
        }
    }
    Ok(())
}
