//! Simulation observer trait for progress reporting and data collection.

use fl_core::Tick;

use crate::{SimEvent, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event, in log order, before the `on_tick_end` of the
    /// tick that emitted it.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called at the end of each tick.  `active` is the number of vehicles
    /// that are in transit after the tick.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called once after the final tick with the run's report.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
