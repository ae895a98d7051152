//! Order records.

use std::collections::BTreeMap;

use fl_core::{LocationId, OrderId, Timestamp};

/// Per-order fractions, keyed by order id.  Used for a location's content,
/// a vehicle's onboard content and the zeroed template.
pub type Fractions = BTreeMap<OrderId, f64>;

/// Physical description of a whole order (fraction 1).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderContent {
    pub volume_m3:   f64,
    pub weight_kg:   f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// One customer order.
///
/// The allocation map is only reachable mutably through
/// [`InventoryLedger::update`](crate::InventoryLedger::update).
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id:          OrderId,
    pub origin:      LocationId,
    pub destination: LocationId,
    pub content:     OrderContent,
    pub deadline:    Timestamp,
    pub(crate) allocation: BTreeMap<LocationId, f64>,
}

impl Order {
    /// An order not yet placed in any ledger (empty allocation).
    pub fn new(
        id: impl Into<OrderId>,
        origin: impl Into<LocationId>,
        destination: impl Into<LocationId>,
        content: OrderContent,
        deadline: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            content,
            deadline,
            allocation: BTreeMap::new(),
        }
    }

    /// Fraction of this order currently at `location` (0 when unknown).
    pub fn fraction_at(&self, location: &str) -> f64 {
        self.allocation.get(location).copied().unwrap_or(0.0)
    }

    /// Sum of the fractions held at locations.
    pub fn allocated_total(&self) -> f64 {
        self.allocation.values().sum()
    }

    /// Weight in kg of `fraction` of this order.
    pub fn weight_of(&self, fraction: f64) -> f64 {
        fraction * self.content.weight_kg
    }

    /// Volume in m³ of `fraction` of this order.
    pub fn volume_of(&self, fraction: f64) -> f64 {
        fraction * self.content.volume_m3
    }
}
