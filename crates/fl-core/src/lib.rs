//! `fl-core` — foundational types for the `rust_fleet` delivery workspace.
//!
//! Every other `fl-*` crate depends on this one.  It has no `fl-*`
//! dependencies and only two external ones (`chrono` for timestamp parsing
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `OrderId`, `VehicleId`, `LocationId`, `ZoneId`            |
//! | [`geo`]   | `Coordinate`, haversine distance, `PlanarFrame`           |
//! | [`point`] | `PointKind`, `DeliveryPoint`, `PointDirectory`            |
//! | [`time`]  | `Tick`, `Timestamp`, `SimClock`, `SimConfig`              |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, coordinates and     |
//! |         | `SimConfig` so applications can load configs from JSON.    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod point;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, PlanarFrame};
pub use ids::{LocationId, OrderId, VehicleId, ZoneId};
pub use point::{DeliveryPoint, PointDirectory, PointKind};
pub use time::{SimClock, SimConfig, Tick, Timestamp};

/// Absolute tolerance used whenever two order fractions are compared.
///
/// Fractions are moved in small decimal steps (0.05, 0.1, …) that are not
/// exactly representable; comparisons against stock use this slack so that
/// e.g. `0.3 + 0.7` still counts as a whole order.
pub const FRACTION_EPSILON: f64 = 1e-9;
