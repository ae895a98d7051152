//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, EventRow, OutputResult, VehicleSummaryRow};

/// A sink for the three output tables.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Append a batch of event rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write the delivery classification, one row per order.
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()>;

    /// Write the per-vehicle summaries.
    fn write_vehicle_summaries(&mut self, rows: &[VehicleSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
