//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `deliveries.csv`
//! - `vehicle_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, EventRow, OutputError, OutputResult, VehicleSummaryRow};

pub const EVENT_HEADERS: [&str; 7] =
    ["time", "tick", "vehicle", "event", "location", "order", "quantity"];
pub const DELIVERY_HEADERS: [&str; 6] =
    ["order", "destination", "deadline", "delivered", "last_unload", "status"];
pub const VEHICLE_HEADERS: [&str; 7] = [
    "vehicle",
    "travel_cost",
    "fixed_cost",
    "total_cost",
    "emission_kg",
    "distance_km",
    "routes_completed",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    events:     Writer<File>,
    deliveries: Writer<File>,
    vehicles:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDirectory(dir.to_path_buf()));
        }
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(DELIVERY_HEADERS)?;

        let mut vehicles = Writer::from_path(dir.join("vehicle_summaries.csv"))?;
        vehicles.write_record(VEHICLE_HEADERS)?;

        tracing::debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            events,
            deliveries,
            vehicles,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.time.clone(),
                row.tick.to_string(),
                row.vehicle.clone(),
                row.kind.to_owned(),
                row.location.clone(),
                row.order.clone(),
                row.quantity.map(|q| q.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries.write_record(&[
                row.order.clone(),
                row.destination.clone(),
                row.deadline.clone(),
                row.delivered.to_string(),
                row.last_unload.clone(),
                row.status.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_vehicle_summaries(&mut self, rows: &[VehicleSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.vehicle.clone(),
                row.travel_cost.to_string(),
                row.fixed_cost.to_string(),
                row.total_cost.to_string(),
                row.emission.to_string(),
                row.distance_km.to_string(),
                row.routes_completed.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.deliveries.flush()?;
        self.vehicles.flush()?;
        Ok(())
    }
}
