//! `fl-zones` — prioritised map zones and distance decomposition.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`zone`]      | `Zone`, `ZoneMap` (name lookup, speed limits)            |
//! | [`decompose`] | `ZoneDistanceDecomposer`, `ZoneDistances`                |
//! | [`error`]     | `ZoneError`, `ZoneResult<T>`                             |
//!
//! # Exclusive distance
//!
//! A straight segment between two delivery points may cross several
//! overlapping zones.  Each metre of the segment is attributed to at most one
//! zone: the one with the highest priority among those covering it (ties go
//! to the zone listed first).  Distances outside every zone are attributed to
//! nobody.
//!
//! ```text
//! covered = ∅
//! for zone in zones sorted by priority desc (stable):
//!     exclusive       = zone − covered
//!     distance[zone]  = length(segment ∩ exclusive)
//!     covered         = covered ∪ zone        // full polygon, not `exclusive`
//! ```
//!
//! Geometry runs in a planar metric frame ([`fl_core::PlanarFrame`]) with the
//! `geo` crate's boolean operations; an `rstar` R-tree over zone envelopes
//! skips zones that cannot touch the segment.

pub mod decompose;
pub mod error;
pub mod zone;

#[cfg(test)]
mod tests;

pub use decompose::{ZoneDistanceDecomposer, ZoneDistances};
pub use error::{ZoneError, ZoneResult};
pub use zone::{Zone, ZoneMap};
