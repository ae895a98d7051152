//! Delivery points: the named places vehicles travel between.
//!
//! Every delivery point is also a ledger location: orders start at a
//! warehouse and end at a delivery address, and vehicles may drop partial
//! orders at any intermediate point.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Coordinate, CoreError, CoreResult, LocationId};

/// The role a delivery point plays in a round.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointKind {
    /// A vehicle depot; routes start and end at their vehicle's home.
    Home,
    /// A stocking location where orders are held between legs.
    #[default]
    Warehouse,
    /// A customer address; orders are delivered here.
    Delivery,
}

impl PointKind {
    /// Lower-case label, as used in datasets and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            PointKind::Home      => "home",
            PointKind::Warehouse => "warehouse",
            PointKind::Delivery  => "delivery",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home"      => Ok(PointKind::Home),
            "warehouse" => Ok(PointKind::Warehouse),
            "delivery"  => Ok(PointKind::Delivery),
            other => Err(CoreError::Parse(format!(
                "invalid point kind {other:?}: expected \"home\", \"warehouse\" or \"delivery\""
            ))),
        }
    }
}

// ── DeliveryPoint ─────────────────────────────────────────────────────────────

/// A named place on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryPoint {
    pub name:        LocationId,
    pub coordinate:  Coordinate,
    pub kind:        PointKind,
    pub description: String,
}

impl DeliveryPoint {
    pub fn new(name: impl Into<LocationId>, coordinate: Coordinate, kind: PointKind) -> Self {
        Self {
            name: name.into(),
            coordinate,
            kind,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ── PointDirectory ────────────────────────────────────────────────────────────

/// All delivery points of a round, in dataset order, with name lookup.
#[derive(Clone, Debug, Default)]
pub struct PointDirectory {
    points: Vec<DeliveryPoint>,
    index:  BTreeMap<LocationId, usize>,
}

impl PointDirectory {
    /// Build a directory, rejecting duplicate names.
    pub fn new(points: Vec<DeliveryPoint>) -> CoreResult<Self> {
        let mut index = BTreeMap::new();
        for (i, p) in points.iter().enumerate() {
            if index.insert(p.name.clone(), i).is_some() {
                return Err(CoreError::DuplicateName {
                    what: "delivery point",
                    name: p.name.to_string(),
                });
            }
        }
        Ok(Self { points, index })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DeliveryPoint> {
        self.index.get(name).map(|&i| &self.points[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Coordinate of `name`, or [`CoreError::UnknownLocation`].
    pub fn coordinate(&self, name: &str) -> CoreResult<Coordinate> {
        self.get(name)
            .map(|p| p.coordinate)
            .ok_or_else(|| CoreError::UnknownLocation(LocationId::from(name)))
    }

    /// Points in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &DeliveryPoint> {
        self.points.iter()
    }

    /// Point names in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &LocationId> {
        self.points.iter().map(|p| &p.name)
    }

    /// Points of one kind, in dataset order.
    pub fn of_kind(&self, kind: PointKind) -> impl Iterator<Item = &DeliveryPoint> {
        self.points.iter().filter(move |p| p.kind == kind)
    }
}
