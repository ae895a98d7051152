//! Read-only round data passed to planning and simulation calls.

use fl_core::{Coordinate, CoreResult, PointDirectory};
use fl_vehicle::{Fleet, Vehicle, VehicleResult};
use fl_zones::ZoneMap;

/// Borrowed view of one round's static data.
///
/// Built once by the application (typically from `fl_data::Round::context`)
/// and copied into every session and simulation.  Nothing reachable from it is
/// mutated while a round is live.
#[derive(Copy, Clone)]
pub struct RoundContext<'a> {
    pub points: &'a PointDirectory,
    pub zones:  &'a ZoneMap,
    pub fleet:  &'a Fleet,
}

impl<'a> RoundContext<'a> {
    #[inline]
    pub fn new(points: &'a PointDirectory, zones: &'a ZoneMap, fleet: &'a Fleet) -> Self {
        Self { points, zones, fleet }
    }

    pub fn vehicle(&self, name: &str) -> VehicleResult<&'a Vehicle> {
        self.fleet.vehicle(name)
    }

    pub fn coordinate(&self, location: &str) -> CoreResult<Coordinate> {
        self.points.coordinate(location)
    }
}
