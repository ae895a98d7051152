//! Zone-exclusive distance decomposition of a straight travel segment.
//!
//! # Frame
//!
//! All zone rings are projected once, at construction, into a
//! [`PlanarFrame`] centred on the mean of every zone vertex.  Segments are
//! projected into the same frame per call, so line and polygons always share
//! units (metres).
//!
//! # Pre-filter
//!
//! Zone envelopes are indexed in an `rstar` R-tree.  A zone whose envelope
//! misses the segment's envelope contributes 0 and is not unioned into the
//! covered region: the region it would add lies away from the segment and
//! cannot change any later intersection with it.

use geo::{BooleanOps, Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use rstar::{RTree, RTreeObject, AABB};

use fl_core::{Coordinate, PlanarFrame, ZoneId};

use crate::Zone;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Planar bounding box of one zone, keyed by its position in priority order.
#[derive(Clone)]
struct ZoneEnvelope {
    rank: usize,
    bbox: AABB<[f64; 2]>,
}

impl RTreeObject for ZoneEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bbox
    }
}

/// A zone prepared for decomposition.
#[derive(Clone)]
struct PlanarZone {
    name:    ZoneId,
    polygon: MultiPolygon<f64>,
}

// ── ZoneDistances ─────────────────────────────────────────────────────────────

/// Result of one decomposition: metres per zone, in priority order.
///
/// Every zone of the map appears, including those the segment never touches
/// (with 0.0).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneDistances {
    entries: Vec<(ZoneId, f64)>,
}

impl ZoneDistances {
    /// Metres attributed to `zone`; 0.0 for unknown names.
    pub fn get(&self, zone: &str) -> f64 {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == zone)
            .map_or(0.0, |&(_, d)| d)
    }

    /// `(zone, metres)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, f64)> {
        self.entries.iter().map(|(name, d)| (name, *d))
    }

    /// `(zone, metres)` pairs with a strictly positive distance.
    pub fn crossed(&self) -> impl Iterator<Item = (&ZoneId, f64)> {
        self.iter().filter(|&(_, d)| d > 0.0)
    }

    /// Total metres attributed to any zone.
    pub fn total_m(&self) -> f64 {
        self.entries.iter().map(|(_, d)| d).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── ZoneDistanceDecomposer ────────────────────────────────────────────────────

/// Attributes the length of straight segments to prioritised zones.
///
/// Construct once per zone set (see [`ZoneMap`](crate::ZoneMap)); every call
/// to [`decompose`](Self::decompose) is read-only.
#[derive(Clone)]
pub struct ZoneDistanceDecomposer {
    frame:     PlanarFrame,
    /// Zones sorted by descending priority; ties keep input order.
    ranked:    Vec<PlanarZone>,
    envelopes: RTree<ZoneEnvelope>,
}

impl ZoneDistanceDecomposer {
    pub fn new(zones: &[Zone]) -> Self {
        let frame = PlanarFrame::new(vertex_mean(zones));

        let mut order: Vec<&Zone> = zones.iter().collect();
        // `sort_by` is stable: equal priorities keep dataset order.
        order.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut ranked = Vec::with_capacity(order.len());
        let mut entries = Vec::with_capacity(order.len());
        for (rank, zone) in order.into_iter().enumerate() {
            let ring: Vec<Coord<f64>> = zone
                .ring
                .iter()
                .map(|&c| {
                    let (x, y) = frame.project(c);
                    Coord { x, y }
                })
                .collect();

            entries.push(ZoneEnvelope { rank, bbox: bbox_of(&ring) });
            ranked.push(PlanarZone {
                name:    zone.name.clone(),
                polygon: MultiPolygon::new(vec![Polygon::new(LineString::new(ring), vec![])]),
            });
        }

        Self {
            frame,
            ranked,
            envelopes: RTree::bulk_load(entries),
        }
    }

    /// Length in metres of the segment, measured in the decomposition frame.
    pub fn segment_length_m(&self, start: Coordinate, end: Coordinate) -> f64 {
        let (x0, y0) = self.frame.project(start);
        let (x1, y1) = self.frame.project(end);
        (x1 - x0).hypot(y1 - y0)
    }

    /// Metres of the straight segment `start → end` attributable exclusively
    /// to each zone.
    pub fn decompose(&self, start: Coordinate, end: Coordinate) -> ZoneDistances {
        let mut distances = vec![0.0; self.ranked.len()];

        let (x0, y0) = self.frame.project(start);
        let (x1, y1) = self.frame.project(end);
        let length = (x1 - x0).hypot(y1 - y0);

        if length > 0.0 && !self.ranked.is_empty() {
            let segment_box = AABB::from_corners([x0, y0], [x1, y1]);
            let mut candidate = vec![false; self.ranked.len()];
            for entry in self.envelopes.locate_in_envelope_intersecting(&segment_box) {
                candidate[entry.rank] = true;
            }

            let line = MultiLineString::new(vec![LineString::from(vec![(x0, y0), (x1, y1)])]);
            let mut covered: Option<MultiPolygon<f64>> = None;

            for (rank, zone) in self.ranked.iter().enumerate() {
                if !candidate[rank] {
                    continue;
                }

                let inside = match &covered {
                    None => zone.polygon.clip(&line, false),
                    Some(done) => zone.polygon.difference(done).clip(&line, false),
                };
                // Clipping can return a hair more than the input on
                // boundary-hugging segments; never exceed what is left.
                let attributed: f64 = distances.iter().sum();
                distances[rank] = planar_length(&inside).min((length - attributed).max(0.0));

                covered = Some(match covered {
                    None => zone.polygon.clone(),
                    Some(done) => done.union(&zone.polygon),
                });
            }

            tracing::trace!(
                length_m = length,
                candidates = candidate.iter().filter(|&&c| c).count(),
                "segment decomposed"
            );
        }

        ZoneDistances {
            entries: self
                .ranked
                .iter()
                .zip(distances)
                .map(|(zone, d)| (zone.name.clone(), d))
                .collect(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn vertex_mean(zones: &[Zone]) -> Coordinate {
    let (mut lat, mut lon, mut n) = (0.0, 0.0, 0usize);
    for c in zones.iter().flat_map(|z| z.ring.iter()) {
        lat += c.lat;
        lon += c.lon;
        n += 1;
    }
    if n == 0 {
        Coordinate::new(0.0, 0.0)
    } else {
        Coordinate::new(lat / n as f64, lon / n as f64)
    }
}

fn bbox_of(ring: &[Coord<f64>]) -> AABB<[f64; 2]> {
    let mut min = [f64::INFINITY, f64::INFINITY];
    let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
    for c in ring {
        min[0] = min[0].min(c.x);
        min[1] = min[1].min(c.y);
        max[0] = max[0].max(c.x);
        max[1] = max[1].max(c.y);
    }
    AABB::from_corners(min, max)
}

fn planar_length(lines: &MultiLineString<f64>) -> f64 {
    lines
        .iter()
        .flat_map(|ls| ls.lines())
        .map(|l| l.dx().hypot(l.dy()))
        .sum()
}
