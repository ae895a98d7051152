//! `fl-sim` — time-stepped replay of committed routes.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.end_tick():
//!   for vehicle in fleet order:
//!     Available:
//!       head route departs ≤ now  → pop, drive home → first stop,
//!                                   emit RouteStart, become InTransit
//!     InTransit:
//!       remaining -= tick duration
//!       remaining ≤ 0             → emit Arrival (once per stop)
//!         stock missing for loads → emit Waiting, remaining = retry interval
//!         else                    → apply ops, emit Load/Unload per op
//!           more stops            → drive to next stop, stay InTransit
//!           last stop             → emit RouteComplete, become Available
//! ```
//!
//! Each vehicle makes at most one transition per tick.  The simulator owns a
//! private ledger: planning state is never touched.  Runs are deterministic;
//! vehicles are evaluated in fleet order and there is no randomness.
//!
//! # Output
//!
//! [`Sim::run`] returns a [`SimReport`]: one [`DeliveryRecord`] per order
//! (on time / late / not delivered, derived from Unload events) and one
//! [`VehicleSummary`] per vehicle.  A [`SimObserver`] sees every event as it
//! happens.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let ctx = round.context();
//! let mut sim = SimBuilder::new(config, ctx, round.fresh_ledger())
//!     .routes(session.routes().clone())
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod report;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{SimEvent, SimEventKind};
pub use observer::{NoopObserver, SimObserver};
pub use report::{DeliveryRecord, DeliveryStatus, SimReport, VehicleSummary, DELIVERED_THRESHOLD};
pub use sim::Sim;
pub use state::{VehicleRuntimeState, VehicleStatus};
