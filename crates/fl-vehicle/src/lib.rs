//! `fl-vehicle` — vehicle specifications and fleet storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` record, `cost_rate` / `emission_rate` model     |
//! | [`fleet`]   | `Fleet` (ordered storage, name lookup)                    |
//! | [`builder`] | `VehicleBuilder` (fluent construction with validation)    |
//! | [`error`]   | `VehicleError`, `VehicleResult<T>`                        |
//!
//! # Cost model
//!
//! Per-kilometre cost and emission interpolate linearly between the empty
//! and full-load figures:
//!
//! ```text
//! fraction = clamp(load_kg / max_weight_kg, 0, 1)
//! rate     = empty + (full - empty) * fraction
//! ```
//!
//! Loads outside `[0, max_weight_kg]` are clamped and logged at `warn`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Vehicle`.           |

pub mod builder;
pub mod error;
pub mod fleet;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use builder::VehicleBuilder;
pub use error::{VehicleError, VehicleResult};
pub use fleet::Fleet;
pub use vehicle::Vehicle;
