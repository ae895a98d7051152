//! round — plan and replay one delivery round.
//!
//! Loads an embedded dataset (depot, two warehouses, two customers, three
//! nested zones), plans one route per vehicle, replays them through the
//! tick simulator and writes `events.csv`, `deliveries.csv` and
//! `vehicle_summaries.csv` to `output/round`.
//!
//! ```text
//! cargo run -p round                    # default config (08:00, 60 s ticks, 8 h)
//! cargo run -p round -- config.json     # SimConfig overrides, start in Unix seconds
//! RUST_LOG=fl_sim=debug cargo run -p round
//! ```

mod dataset;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fl_core::{SimConfig, Timestamp};
use fl_data::{load_config, Round};
use fl_output::{CsvWriter, OutputWriter, SimOutputObserver};
use fl_plan::{Operation, PlanningSession, StepDraft};
use fl_sim::{SimBuilder, SimEvent, SimObserver, SimReport};

use dataset::{FLEET_JSON, MAP_JSON, ORDERS_JSON, ROUND_DAY};

const OUTPUT_DIR: &str = "output/round";

// ── Observer wrapper counting events per kind ────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    by_kind: BTreeMap<&'static str, usize>,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, by_kind: BTreeMap::new() }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_event(&mut self, event: &SimEvent) {
        *self.by_kind.entry(event.kind.as_str()).or_default() += 1;
        self.inner.on_event(event);
    }

    fn on_tick_end(&mut self, tick: fl_core::Tick, active: usize) {
        self.inner.on_tick_end(tick, active);
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        self.inner.on_sim_end(report);
    }
}

// ── Planning ─────────────────────────────────────────────────────────────────

fn at(time: &str) -> Result<Timestamp> {
    Ok(Timestamp::parse(&format!("2025-03-10T{time}:00"))?)
}

fn stop(location: &str, ops: Vec<Operation>) -> StepDraft {
    StepDraft::with_operations(location, ops)
}

/// Validate `stops` between two home steps and commit the route.
fn plan_route(
    session: &mut PlanningSession<'_>,
    vehicle: &str,
    departure: Timestamp,
    stops: Vec<StepDraft>,
) -> Result<()> {
    session.begin_route(vehicle)?;
    let home = session.context().vehicle(vehicle)?.home.clone();
    session.validate_step(&StepDraft::new(home.as_str()))?;
    for draft in &stops {
        session
            .validate_step(draft)
            .with_context(|| format!("{vehicle}: step at {}", draft.location()))?;
    }
    session.validate_step(&StepDraft::new(home.as_str()))?;

    let route = session.commit_route(departure)?;
    let impact = route.impact();
    println!(
        "{vehicle:<8} dep {}  {:>6.2} km  {:>7.2} EUR  {:>6.2} kg CO2  {:>5.0} min",
        route.departure(),
        impact.distance_km,
        impact.cost,
        impact.emission,
        impact.duration_h * 60.0,
    );
    for seg in &impact.segments {
        let zones: Vec<String> = seg.zone_km.iter().map(|(z, km)| format!("{z} {km:.2}")).collect();
        println!("    {} -> {}  [{}]", seg.from, seg.to, zones.join(", "));
    }
    Ok(())
}

// ── main ─────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fl_sim=info".parse()?))
        .init();

    println!("=== round — fleet delivery planning ===");

    // 1. Load the round.
    let round = Round::from_readers(
        Cursor::new(MAP_JSON),
        Cursor::new(FLEET_JSON),
        Cursor::new(ORDERS_JSON),
    )?;
    println!(
        "Round: {} points, {} zones, {} vehicles, {} orders",
        round.points().len(),
        round.zones().len(),
        round.fleet().len(),
        round.fresh_ledger().len(),
    );
    println!();

    // 2. Plan.
    let mut session = round.planning_session();
    plan_route(
        &mut session,
        "Van-1",
        at("08:30")?,
        vec![
            stop(
                "Entrepot Nord",
                vec![Operation::load("BC001", 1.0)?, Operation::load("BC003", 1.0)?],
            ),
            stop("Client B", vec![Operation::unload("BC003", 1.0)?]),
            stop("Client A", vec![Operation::unload("BC001", 1.0)?]),
        ],
    )?;
    plan_route(
        &mut session,
        "Truck-1",
        at("09:00")?,
        vec![
            stop("Entrepot Sud", vec![Operation::load("BC002", 1.0)?]),
            stop("Client B", vec![Operation::unload("BC002", 1.0)?]),
        ],
    )?;
    println!();

    // 3. Sim config.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            load_config(file)?
        }
        None => SimConfig::starting_on(Timestamp::parse(ROUND_DAY)?),
    };

    // 4. Build the sim on a fresh copy of the initial ledger.
    let mut sim = SimBuilder::new(config, round.context(), round.fresh_ledger())
        .routes(session.into_routes())
        .build()?;

    // 5. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 6. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    match obs.inner.take_error() {
        Some(e) => eprintln!("output error: {e}"),
        None => tracing::info!(dir = OUTPUT_DIR, "output written"),
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), report.final_tick);
    for (kind, n) in &obs.by_kind {
        println!("  {kind:<15} {n}");
    }
    println!();

    println!("{:<8} {:<10} {:<20} {:<14}", "Order", "Delivered", "Last unload", "Status");
    println!("{}", "-".repeat(54));
    for d in &report.deliveries {
        let last = d.last_unload.map(|t| t.to_string()).unwrap_or_else(|| "-".to_owned());
        println!("{:<8} {:<10.2} {:<20} {:<14}", d.order, d.delivered, last, d.status);
    }
    println!();

    println!("{:<8} {:>8} {:>8} {:>8} {:>9}", "Vehicle", "km", "Travel", "Fixed", "CO2 kg");
    println!("{}", "-".repeat(45));
    for v in &report.vehicles {
        println!(
            "{:<8} {:>8.2} {:>8.2} {:>8.2} {:>9.2}",
            v.vehicle, v.distance_km, v.travel_cost, v.fixed_cost, v.emission
        );
    }
    println!(
        "Fleet total: {:.2} EUR, {:.2} kg CO2",
        report.total_cost(),
        report.total_emission()
    );

    Ok(())
}
