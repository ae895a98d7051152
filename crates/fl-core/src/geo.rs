//! Geographic coordinate type and the planar projection used for geometry.
//!
//! Coordinates are WGS-84 degrees in `f64`.  Polygon boolean operations need
//! a planar metric frame, so [`PlanarFrame`] maps coordinates to local
//! east/north metres with an equirectangular projection around a reference
//! point.  Over a delivery area (tens of km) the distortion is well under
//! 0.5 %, and distances along any straight segment are measured in the same
//! frame as the zone polygons, so attribution stays consistent.
//!
//! With the `proj-transforms` feature (needs the system `libproj`) the frame
//! projects through PROJ into Lambert-93 (`EPSG:2154`) instead, falling back
//! to the equirectangular formula for any point PROJ cannot transform.

use std::fmt;

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Midpoint in degree space.  Good enough as a projection origin.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.lat + other.lat) * 0.5, (self.lon + other.lon) * 0.5)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── PlanarFrame ───────────────────────────────────────────────────────────────

/// Local planar frame: geographic degrees → planar metres.
///
/// `x` grows eastwards and `y` northwards from the frame origin.  Without
/// PROJ the east-west scale is fixed at the origin's latitude, which keeps
/// straight lines straight after projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarFrame {
    origin: Coordinate,
    cos_lat: f64,
    /// Lambert-93 easting/northing of `origin`, when PROJ is available.
    projected_origin: Option<(f64, f64)>,
}

impl PlanarFrame {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            cos_lat: origin.lat.to_radians().cos(),
            projected_origin: proj_forward(origin),
        }
    }

    #[inline]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// `true` when the frame projects through PROJ.
    pub fn is_proj(&self) -> bool {
        self.projected_origin.is_some()
    }

    /// Project `c` into `(x, y)` metres relative to the frame origin.
    pub fn project(&self, c: Coordinate) -> (f64, f64) {
        if let Some((e0, n0)) = self.projected_origin {
            if let Some((e, n)) = proj_forward(c) {
                return (e - e0, n - n0);
            }
        }
        let x = (c.lon - self.origin.lon).to_radians() * EARTH_RADIUS_M * self.cos_lat;
        let y = (c.lat - self.origin.lat).to_radians() * EARTH_RADIUS_M;
        (x, y)
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, x: f64, y: f64) -> Coordinate {
        if let Some((e0, n0)) = self.projected_origin {
            if let Some(c) = proj_inverse(e0 + x, n0 + y) {
                return c;
            }
        }
        let lat = self.origin.lat + (y / EARTH_RADIUS_M).to_degrees();
        let lon = self.origin.lon + (x / (EARTH_RADIUS_M * self.cos_lat)).to_degrees();
        Coordinate::new(lat, lon)
    }
}

// ── PROJ (feature-gated) ──────────────────────────────────────────────────────

#[cfg(feature = "proj-transforms")]
const PROJECTED_CRS: &str = "EPSG:2154";

/// WGS-84 → Lambert-93 easting/northing.  `None` when PROJ fails.
#[cfg(feature = "proj-transforms")]
fn proj_forward(c: Coordinate) -> Option<(f64, f64)> {
    let transformer = proj::Proj::new_known_crs("EPSG:4326", PROJECTED_CRS, None).ok()?;
    // PROJ takes (lon, lat) for EPSG:4326 here.
    transformer.convert((c.lon, c.lat)).ok()
}

#[cfg(feature = "proj-transforms")]
fn proj_inverse(easting: f64, northing: f64) -> Option<Coordinate> {
    let transformer = proj::Proj::new_known_crs(PROJECTED_CRS, "EPSG:4326", None).ok()?;
    let (lon, lat) = transformer.convert((easting, northing)).ok()?;
    Some(Coordinate::new(lat, lon))
}

#[cfg(not(feature = "proj-transforms"))]
fn proj_forward(_: Coordinate) -> Option<(f64, f64)> {
    None
}

#[cfg(not(feature = "proj-transforms"))]
fn proj_inverse(_: f64, _: f64) -> Option<Coordinate> {
    None
}
