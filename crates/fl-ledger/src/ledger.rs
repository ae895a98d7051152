//! `InventoryLedger`: exclusive owner of order allocations for one planning
//! session or one simulation run.

use std::collections::{BTreeMap, BTreeSet};

use fl_core::{CoreError, LocationId, OrderId};

use crate::{Fractions, LedgerError, LedgerResult, Order};

/// Absolute tolerance of the sum-to-one check.
pub const CONSERVATION_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryLedger {
    /// Known locations, dataset order.
    locations: Vec<LocationId>,
    /// Orders, dataset order.
    orders:    Vec<Order>,
    index:     BTreeMap<OrderId, usize>,
}

impl InventoryLedger {
    /// Build the initial allocation: every order entirely at its origin.
    ///
    /// Fails on duplicate locations or order ids, on an origin or
    /// destination the ledger does not track, and on negative or non-finite
    /// weight/volume.
    pub fn new(locations: Vec<LocationId>, orders: Vec<Order>) -> LedgerResult<Self> {
        let mut seen = BTreeSet::new();
        for loc in &locations {
            if !seen.insert(loc) {
                return Err(CoreError::DuplicateName {
                    what: "location",
                    name: loc.to_string(),
                }
                .into());
            }
        }

        let mut ledger = Self {
            locations,
            orders: Vec::with_capacity(orders.len()),
            index: BTreeMap::new(),
        };

        for mut order in orders {
            ledger.check_order(&order)?;
            if ledger.index.contains_key(&order.id) {
                return Err(CoreError::DuplicateName {
                    what: "order",
                    name: order.id.to_string(),
                }
                .into());
            }
            order.allocation = ledger
                .locations
                .iter()
                .map(|loc| (loc.clone(), if *loc == order.origin { 1.0 } else { 0.0 }))
                .collect();
            ledger.index.insert(order.id.clone(), ledger.orders.len());
            ledger.orders.push(order);
        }

        Ok(ledger)
    }

    fn check_order(&self, order: &Order) -> LedgerResult<()> {
        let invalid = |reason: &str| LedgerError::InvalidOrder {
            order:  order.id.clone(),
            reason: reason.to_owned(),
        };
        if order.id.is_blank() {
            return Err(invalid("empty id"));
        }
        for loc in [&order.origin, &order.destination] {
            if !self.tracks(loc) {
                return Err(LedgerError::UnknownLocation(loc.clone()));
            }
        }
        let c = &order.content;
        if !c.weight_kg.is_finite() || c.weight_kg < 0.0 {
            return Err(invalid("weight must be a non-negative number"));
        }
        if !c.volume_m3.is_finite() || c.volume_m3 < 0.0 {
            return Err(invalid("volume must be a non-negative number"));
        }
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn tracks(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l.as_str() == location)
    }

    /// Orders in dataset order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn order(&self, id: &str) -> LedgerResult<&Order> {
        self.index
            .get(id)
            .map(|&i| &self.orders[i])
            .ok_or_else(|| LedgerError::UnknownOrder(OrderId::from(id)))
    }

    /// Fraction of `order` at `location`; 0 for anything unknown.
    pub fn fraction(&self, location: &str, order: &str) -> f64 {
        self.index
            .get(order)
            .map_or(0.0, |&i| self.orders[i].fraction_at(location))
    }

    /// Orders with a strictly positive fraction at `location`.
    pub fn content_at(&self, location: &str) -> Fractions {
        self.orders
            .iter()
            .filter_map(|o| {
                let f = o.fraction_at(location);
                (f > 0.0).then(|| (o.id.clone(), f))
            })
            .collect()
    }

    /// Every known location with its positive `(order, fraction)` pairs, in
    /// dataset order for both locations and orders.
    pub fn orders_by_location(&self) -> Vec<(LocationId, Vec<(OrderId, f64)>)> {
        self.locations
            .iter()
            .map(|loc| {
                let held = self
                    .orders
                    .iter()
                    .filter_map(|o| {
                        let f = o.fraction_at(loc);
                        (f > 0.0).then(|| (o.id.clone(), f))
                    })
                    .collect();
                (loc.clone(), held)
            })
            .collect()
    }

    /// Every order mapped to 0: the starting onboard content of a vehicle.
    pub fn zeroed_content_template(&self) -> Fractions {
        self.orders.iter().map(|o| (o.id.clone(), 0.0)).collect()
    }

    /// Total fraction of `order` held at locations (excludes onboard).
    pub fn allocated_total(&self, order: &str) -> LedgerResult<f64> {
        self.order(order).map(Order::allocated_total)
    }

    /// Weight in kg held at `location`.
    pub fn weight_at(&self, location: &str) -> f64 {
        self.orders.iter().map(|o| o.weight_of(o.fraction_at(location))).sum()
    }

    /// Volume in m³ held at `location`.
    pub fn volume_at(&self, location: &str) -> f64 {
        self.orders.iter().map(|o| o.volume_of(o.fraction_at(location))).sum()
    }

    /// Weight in kg of an arbitrary fraction map (e.g. a vehicle's content).
    /// Unknown order ids weigh nothing.
    pub fn weight_of(&self, content: &Fractions) -> f64 {
        content
            .iter()
            .filter_map(|(id, &f)| self.order(id).ok().map(|o| o.weight_of(f)))
            .sum()
    }

    /// Volume in m³ of an arbitrary fraction map.
    pub fn volume_of(&self, content: &Fractions) -> f64 {
        content
            .iter()
            .filter_map(|(id, &f)| self.order(id).ok().map(|o| o.volume_of(f)))
            .sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `delta` to the fraction of `order` at `location`, clamping the
    /// result at 0.  Returns the new fraction.
    pub fn update(&mut self, location: &str, order: &str, delta: f64) -> LedgerResult<f64> {
        if !self.tracks(location) {
            return Err(LedgerError::UnknownLocation(LocationId::from(location)));
        }
        let &i = self
            .index
            .get(order)
            .ok_or_else(|| LedgerError::UnknownOrder(OrderId::from(order)))?;
        if !delta.is_finite() {
            return Err(LedgerError::NonFiniteDelta {
                location: LocationId::from(location),
                order: OrderId::from(order),
                delta,
            });
        }

        let slot = self.orders[i]
            .allocation
            .entry(LocationId::from(location))
            .or_insert(0.0);
        let raw = *slot + delta;
        if raw < 0.0 {
            tracing::debug!(%location, %order, raw, "allocation clamped at zero");
        }
        *slot = raw.max(0.0);
        Ok(*slot)
    }

    // ── Invariant ─────────────────────────────────────────────────────────

    /// Check `allocated + onboard == 1` for every order, within
    /// [`CONSERVATION_TOLERANCE`].
    pub fn check_conservation(&self, onboard: &Fractions) -> LedgerResult<()> {
        for o in &self.orders {
            let total = o.allocated_total() + onboard.get(&o.id).copied().unwrap_or(0.0);
            if (total - 1.0).abs() > CONSERVATION_TOLERANCE {
                return Err(LedgerError::ConservationViolated { order: o.id.clone(), total });
            }
        }
        Ok(())
    }
}
