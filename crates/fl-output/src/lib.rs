//! `fl-output` — simulation output writers for the rust_fleet workspace.
//!
//! | File                    | One row per                                  |
//! |-------------------------|----------------------------------------------|
//! | `events.csv`            | simulator event, in log order                |
//! | `deliveries.csv`        | order, with its delivery classification      |
//! | `vehicle_summaries.csv` | vehicle, with cost / emission / distance     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `fl_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fl_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, EventRow, VehicleSummaryRow};
pub use writer::OutputWriter;
