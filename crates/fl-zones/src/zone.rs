//! Zone definitions and the per-round zone map.

use std::collections::BTreeMap;

use fl_core::{Coordinate, CoreError, ZoneId};

use crate::{ZoneDistanceDecomposer, ZoneDistances, ZoneError, ZoneResult};

/// A prioritised polygon on the map.
///
/// `ring` is the outer boundary in geographic coordinates; it does not need
/// to repeat its first vertex.  Higher `priority` wins where zones overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub name:            ZoneId,
    pub ring:            Vec<Coordinate>,
    pub priority:        i32,
    /// Maximum speed inside the zone, km/h.  `None` means the vehicle's own
    /// maximum applies.
    pub speed_limit_kmh: Option<f64>,
    pub description:     String,
}

impl Zone {
    pub fn new(name: impl Into<ZoneId>, ring: Vec<Coordinate>, priority: i32) -> Self {
        Self {
            name: name.into(),
            ring,
            priority,
            speed_limit_kmh: None,
            description: String::new(),
        }
    }

    pub fn with_speed_limit(mut self, kmh: f64) -> Self {
        self.speed_limit_kmh = Some(kmh);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn check(&self) -> ZoneResult<()> {
        let degenerate = |reason: &str| ZoneError::DegenerateZone {
            zone:   self.name.clone(),
            reason: reason.to_owned(),
        };
        if self.name.is_blank() {
            return Err(degenerate("empty name"));
        }
        if self.ring.iter().any(|c| !c.lat.is_finite() || !c.lon.is_finite()) {
            return Err(degenerate("non-finite vertex"));
        }
        let mut distinct = self.ring.clone();
        distinct.dedup();
        if distinct.len() > 1 && distinct.first() == distinct.last() {
            distinct.pop();
        }
        if distinct.len() < 3 {
            return Err(degenerate("ring needs at least 3 distinct vertices"));
        }
        if let Some(limit) = self.speed_limit_kmh {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(degenerate("speed limit must be positive"));
            }
        }
        Ok(())
    }
}

// ── ZoneMap ───────────────────────────────────────────────────────────────────

/// All zones of a round, in dataset order, plus the prepared decomposer.
///
/// Built once per round and shared read-only by the planner and simulator.
#[derive(Clone)]
pub struct ZoneMap {
    zones:      Vec<Zone>,
    index:      BTreeMap<ZoneId, usize>,
    decomposer: ZoneDistanceDecomposer,
}

impl ZoneMap {
    /// Validate `zones` and prepare the decomposer.
    pub fn new(zones: Vec<Zone>) -> ZoneResult<Self> {
        let mut index = BTreeMap::new();
        for (i, z) in zones.iter().enumerate() {
            z.check()?;
            if index.insert(z.name.clone(), i).is_some() {
                return Err(CoreError::DuplicateName {
                    what: "zone",
                    name: z.name.to_string(),
                }
                .into());
            }
        }
        let decomposer = ZoneDistanceDecomposer::new(&zones);
        Ok(Self { zones, index, decomposer })
    }

    /// A map with no zones: every segment decomposes to nothing.
    pub fn empty() -> Self {
        Self {
            zones:      Vec::new(),
            index:      BTreeMap::new(),
            decomposer: ZoneDistanceDecomposer::new(&[]),
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.index.get(name).map(|&i| &self.zones[i])
    }

    /// Zones in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Speed limit of `name`, `Ok(None)` when the zone sets none.
    pub fn speed_limit(&self, name: &str) -> ZoneResult<Option<f64>> {
        self.get(name)
            .map(|z| z.speed_limit_kmh)
            .ok_or_else(|| ZoneError::MissingZoneData(ZoneId::from(name)))
    }

    /// Speed a vehicle capped at `max_speed_kmh` actually drives in `name`.
    ///
    /// A missing zone is not fatal: it is logged and the vehicle's own
    /// maximum applies.
    pub fn effective_speed(&self, name: &str, max_speed_kmh: f64) -> f64 {
        match self.speed_limit(name) {
            Ok(Some(limit)) => max_speed_kmh.min(limit),
            Ok(None) => max_speed_kmh,
            Err(e) => {
                tracing::warn!(error = %e, "no speed override applied");
                max_speed_kmh
            }
        }
    }

    pub fn decomposer(&self) -> &ZoneDistanceDecomposer {
        &self.decomposer
    }

    /// Shorthand for `self.decomposer().decompose(start, end)`.
    pub fn decompose(&self, start: Coordinate, end: Coordinate) -> ZoneDistances {
        self.decomposer.decompose(start, end)
    }
}

impl std::fmt::Debug for ZoneMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneMap").field("zones", &self.zones).finish_non_exhaustive()
    }
}
