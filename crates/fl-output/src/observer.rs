//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fl_core::Tick;
use fl_sim::{SimEvent, SimObserver, SimReport};

use crate::row::{DeliveryRow, EventRow, VehicleSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams the event log to any [`OutputWriter`] and
/// writes the delivery and vehicle tables when the run ends.
///
/// Events are buffered per tick and written at `on_tick_end`.  Errors from
/// the writer are stored internally because `SimObserver` methods have no
/// return value; check them with [`take_error`][Self::take_error] after
/// `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            written:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Event rows handed to the writer so far.
    pub fn events_written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        if result.is_ok() {
            self.written += self.pending.len();
        }
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            tracing::warn!(error = %e, "output write failed");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &SimEvent) {
        self.pending.push(EventRow::from(event));
    }

    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {
        self.flush_events();
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        self.flush_events();

        let deliveries: Vec<DeliveryRow> = report.deliveries.iter().map(DeliveryRow::from).collect();
        let result = self.writer.write_deliveries(&deliveries);
        self.store_err(result);

        let vehicles: Vec<VehicleSummaryRow> =
            report.vehicles.iter().map(VehicleSummaryRow::from).collect();
        let result = self.writer.write_vehicle_summaries(&vehicles);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
