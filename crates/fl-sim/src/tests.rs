//! Unit tests for fl-sim.
//!
//! Fixture: a straight street running north.  Depot at 0 m, W1 at 1 km,
//! Client at 2 km, W2 at 3 km, all inside one zone.  Vans drive 60 km/h, so
//! one kilometre takes one 60-second tick.

#[cfg(test)]
mod helpers {
    use fl_core::{
        Coordinate, DeliveryPoint, LocationId, PointDirectory, PointKind, SimConfig, Timestamp,
    };
    use fl_ledger::{InventoryLedger, Order, OrderContent};
    use fl_plan::{Operation, PlanningSession, RoundContext, RouteBook, StepDraft};
    use fl_vehicle::{Fleet, Vehicle, VehicleBuilder};
    use fl_zones::{Zone, ZoneMap};

    const LAT: f64 = 48.85;
    const LON: f64 = 2.35;

    fn at(m: f64) -> Coordinate {
        Coordinate::new(LAT + (m / 6_371_000.0_f64).to_degrees(), LON)
    }

    pub fn time(hhmm: &str) -> Timestamp {
        Timestamp::parse(&format!("2025-03-10T{hhmm}:00")).unwrap()
    }

    pub fn config() -> SimConfig {
        SimConfig::starting_on(time("00:00"))
    }

    pub fn van(name: &str) -> Vehicle {
        VehicleBuilder::new(name, "Depot")
            .capacity(1_000.0, 10.0)
            .range_km(100.0)
            .max_speed_kmh(60.0)
            .cost_per_km(0.4, 1.0)
            .emission_per_km(0.2, 0.5)
            .fixed_daily_cost(25.0)
            .build()
            .unwrap()
    }

    pub struct Fixture {
        pub points: PointDirectory,
        pub zones:  ZoneMap,
        pub fleet:  Fleet,
        pub ledger: InventoryLedger,
    }

    impl Fixture {
        pub fn ctx(&self) -> RoundContext<'_> {
            RoundContext::new(&self.points, &self.zones, &self.fleet)
        }

        pub fn session(&self) -> PlanningSession<'_> {
            PlanningSession::new(self.ctx(), self.ledger.clone())
        }
    }

    pub fn fixture() -> Fixture {
        let points = PointDirectory::new(vec![
            DeliveryPoint::new("Depot", at(0.0), PointKind::Home),
            DeliveryPoint::new("W1", at(1_000.0), PointKind::Warehouse),
            DeliveryPoint::new("Client", at(2_000.0), PointKind::Delivery),
            DeliveryPoint::new("W2", at(3_000.0), PointKind::Warehouse),
        ])
        .unwrap();
        let zone = Zone::new(
            "City",
            vec![
                Coordinate::new(at(-500.0).lat, LON - 0.01),
                Coordinate::new(at(-500.0).lat, LON + 0.01),
                Coordinate::new(at(4_000.0).lat, LON + 0.01),
                Coordinate::new(at(4_000.0).lat, LON - 0.01),
            ],
            1,
        );
        let zones = ZoneMap::new(vec![zone]).unwrap();
        let fleet = Fleet::new(vec![van("VanA"), van("VanB")]).unwrap();

        let order = |id: &str, deadline: &str, kg: f64| {
            Order::new(
                id,
                "W1",
                "Client",
                OrderContent { weight_kg: kg, volume_m3: 1.0, description: String::new() },
                time(deadline),
            )
        };
        let ledger = InventoryLedger::new(
            points.names().cloned().collect::<Vec<LocationId>>(),
            vec![order("O1", "12:00", 100.0), order("O2", "10:00", 40.0), order("O3", "12:00", 60.0)],
        )
        .unwrap();

        Fixture { points, zones, fleet, ledger }
    }

    pub fn load(location: &str, order: &str, q: f64) -> StepDraft {
        StepDraft::with_operations(location, vec![Operation::load(order, q).unwrap()])
    }

    pub fn unload(location: &str, order: &str, q: f64) -> StepDraft {
        StepDraft::with_operations(location, vec![Operation::unload(order, q).unwrap()])
    }

    /// Plan and commit `Depot → stops… → Depot` for `vehicle`.
    pub fn commit(s: &mut PlanningSession<'_>, vehicle: &str, depart: &str, stops: Vec<StepDraft>) {
        s.begin_route(vehicle).unwrap();
        s.validate_step(&StepDraft::new("Depot")).unwrap();
        for stop in &stops {
            s.validate_step(stop).unwrap();
        }
        s.validate_step(&StepDraft::new("Depot")).unwrap();
        s.commit_route(time(depart)).unwrap();
    }

    /// O2 delivered in two halves, at 09:00 and 11:00 (deadline 10:00).
    pub fn split_delivery(f: &Fixture) -> RouteBook {
        let mut s = f.session();
        for depart in ["09:00", "11:00"] {
            commit(&mut s, "VanA", depart, vec![load("W1", "O2", 0.5), unload("Client", "O2", 0.5)]);
        }
        s.into_routes()
    }

    /// VanA brings O3 from W1 to W2 at 09:30; VanB, leaving at 09:00,
    /// collects it at W2 and delivers it.
    pub fn relay(f: &Fixture) -> RouteBook {
        let mut s = f.session();
        commit(&mut s, "VanA", "09:30", vec![load("W1", "O3", 1.0), unload("W2", "O3", 1.0)]);
        commit(&mut s, "VanB", "09:00", vec![load("W2", "O3", 1.0), unload("Client", "O3", 1.0)]);
        s.into_routes()
    }
}

#[cfg(test)]
mod run {
    use fl_core::Tick;
    use fl_ledger::Fractions;

    use super::helpers::{config, fixture, relay, split_delivery, time};
    use crate::{DeliveryStatus, NoopObserver, SimBuilder, SimEventKind, VehicleStatus};

    #[test]
    fn split_delivery_after_deadline_is_late() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(split_delivery(&f))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        let unloads: Vec<_> = sim
            .events()
            .iter()
            .filter(|e| e.kind == SimEventKind::Unload)
            .collect();
        assert_eq!(unloads.len(), 2);
        assert!(unloads[0].time < time("10:00"));
        assert!(unloads[1].time > time("10:00"));

        let o2 = report.delivery("O2").unwrap();
        assert!((o2.delivered - 1.0).abs() < 1e-9);
        assert_eq!(o2.status, DeliveryStatus::Late);
        assert_eq!(report.delivery("O1").unwrap().status, DeliveryStatus::NotDelivered);
    }

    #[test]
    fn event_sequence_of_one_route() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(split_delivery(&f))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let first_route: Vec<SimEventKind> = sim
            .events()
            .iter()
            .take_while(|e| e.time < time("10:00"))
            .map(|e| e.kind)
            .collect();
        use SimEventKind::*;
        assert_eq!(
            first_route,
            vec![RouteStart, Arrival, Arrival, Load, Arrival, Unload, Arrival, RouteComplete]
        );
        let load = sim.events().iter().find(|e| e.kind == Load).unwrap();
        assert_eq!(load.location.as_str(), "W1");
        assert_eq!(load.order.as_ref().unwrap().as_str(), "O2");
        assert_eq!(load.quantity, Some(0.5));
    }

    #[test]
    fn events_are_time_ordered() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(relay(&f))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.events().windows(2).all(|w| w[0].time <= w[1].time && w[0].tick <= w[1].tick));
    }

    #[test]
    fn vehicle_waits_for_stock_then_loads() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(relay(&f))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        let events = sim.events();

        let waits = events
            .iter()
            .filter(|e| e.kind == SimEventKind::Waiting && e.vehicle.as_str() == "VanB")
            .count();
        assert!(waits >= 1);

        let arrivals_at_w2 = events
            .iter()
            .filter(|e| {
                e.kind == SimEventKind::Arrival
                    && e.vehicle.as_str() == "VanB"
                    && e.location.as_str() == "W2"
            })
            .count();
        assert_eq!(arrivals_at_w2, 1);

        let dropped = events
            .iter()
            .position(|e| e.kind == SimEventKind::Unload && e.location.as_str() == "W2")
            .unwrap();
        let picked = events
            .iter()
            .position(|e| e.kind == SimEventKind::Load && e.vehicle.as_str() == "VanB")
            .unwrap();
        assert!(dropped < picked);

        assert_eq!(report.delivery("O3").unwrap().status, DeliveryStatus::OnTime);
        sim.ledger().check_conservation(&Default::default()).unwrap();
    }

    #[test]
    fn allocation_is_conserved_on_every_tick() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(relay(&f))
            .build()
            .unwrap();

        let mut ticks_with_cargo = 0;
        for _ in 0..config().end_tick().0 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            let mut onboard = Fractions::new();
            for vehicle in ["VanA", "VanB"] {
                for (order, q) in &sim.state(vehicle).unwrap().onboard {
                    *onboard.entry(order.clone()).or_insert(0.0) += q;
                }
            }
            if onboard.values().any(|&q| q > 0.0) {
                ticks_with_cargo += 1;
            }
            sim.ledger().check_conservation(&onboard).unwrap();
        }
        assert!(ticks_with_cargo > 0);
        assert!(sim.is_idle());
    }

    #[test]
    fn runs_are_deterministic() {
        let f = fixture();
        let run = || {
            let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
                .routes(relay(&f))
                .build()
                .unwrap();
            let report = sim.run(&mut NoopObserver).unwrap();
            (sim.events().to_vec(), report)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn vehicle_summary_totals() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(split_delivery(&f))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        let a = &report.vehicles[0];
        assert_eq!(a.vehicle.as_str(), "VanA");
        assert_eq!(a.routes_completed, 2);
        assert!((a.distance_km - 8.0).abs() < 1e-4, "{}", a.distance_km);
        assert_eq!(a.fixed_cost, 25.0);

        let b = &report.vehicles[1];
        assert_eq!(b.routes_completed, 0);
        assert_eq!(b.fixed_cost, 0.0);
        assert_eq!(b.total_cost(), 0.0);
        assert!((report.total_cost() - a.total_cost()).abs() < 1e-12);
    }

    #[test]
    fn route_after_horizon_never_starts() {
        let f = fixture();
        let mut s = f.session();
        super::helpers::commit(
            &mut s,
            "VanA",
            "17:00",
            vec![super::helpers::load("W1", "O1", 1.0), super::helpers::unload("Client", "O1", 1.0)],
        );
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(s.into_routes())
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert!(sim.events().is_empty());
        assert_eq!(report.final_tick, Tick(480));
        assert_eq!(report.delivery("O1").unwrap().status, DeliveryStatus::NotDelivered);
        assert!(!sim.is_idle());
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(split_delivery(&f))
            .build()
            .unwrap();
        // 08:00 + 60 ticks = 09:00, the first departure.
        sim.run_ticks(61, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick(), Tick(61));
        assert_eq!(sim.state("VanA").unwrap().status, VehicleStatus::InTransit);
        assert_eq!(sim.events().len(), 1);
        assert_eq!(sim.events()[0].kind, SimEventKind::RouteStart);
    }

    #[test]
    fn idle_run_produces_no_events() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone()).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert!(sim.events().is_empty());
        assert!(sim.is_idle());
        assert_eq!(report.count(DeliveryStatus::NotDelivered), 3);
    }
}

#[cfg(test)]
mod builder {
    use fl_core::SimConfig;
    use fl_plan::RoundContext;
    use fl_vehicle::Fleet;

    use super::helpers::{config, fixture, relay, van};
    use crate::{SimBuilder, SimError};

    #[test]
    fn zero_tick_duration_rejected() {
        let f = fixture();
        let cfg = SimConfig { tick_duration_secs: 0, ..config() };
        let result = SimBuilder::new(cfg, f.ctx(), f.ledger.clone()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn route_for_vehicle_outside_fleet_rejected() {
        let f = fixture();
        let routes = relay(&f);
        let only_a = Fleet::new(vec![van("VanA")]).unwrap();
        let ctx = RoundContext::new(&f.points, &f.zones, &only_a);
        let result = SimBuilder::new(config(), ctx, f.ledger.clone()).routes(routes).build();
        assert!(matches!(result, Err(SimError::UnknownVehicle(v)) if v.as_str() == "VanB"));
    }
}

#[cfg(test)]
mod observer {
    use fl_core::Tick;

    use super::helpers::{config, fixture, split_delivery};
    use crate::{SimBuilder, SimEvent, SimObserver, SimReport};

    #[derive(Default)]
    struct Recorder {
        ticks:      u64,
        events:     usize,
        max_active: usize,
        ended:      u32,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.ticks += 1;
        }
        fn on_event(&mut self, _event: &SimEvent) {
            self.events += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, active: usize) {
            self.max_active = self.max_active.max(active);
        }
        fn on_sim_end(&mut self, _report: &SimReport) {
            self.ended += 1;
        }
    }

    #[test]
    fn hooks_fire() {
        let f = fixture();
        let mut sim = SimBuilder::new(config(), f.ctx(), f.ledger.clone())
            .routes(split_delivery(&f))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.ticks, 480);
        assert_eq!(rec.events, sim.events().len());
        assert_eq!(rec.max_active, 1);
        assert_eq!(rec.ended, 1);
    }
}

#[cfg(test)]
mod classify {
    use fl_core::{LocationId, Tick, VehicleId};

    use super::helpers::{fixture, time};
    use crate::report::classify_deliveries;
    use crate::{DeliveryStatus, SimEvent, SimEventKind};

    fn unload(order: &str, at: &str, hhmm: &str, q: f64) -> SimEvent {
        SimEvent::new(
            time(hhmm),
            Tick(0),
            VehicleId::from("VanA"),
            SimEventKind::Unload,
            LocationId::from(at),
        )
        .with_order(order.into(), q)
    }

    #[test]
    fn thresholds_and_deadlines() {
        let f = fixture();
        let events = vec![
            unload("O1", "Client", "11:00", 1.0),
            unload("O2", "Client", "09:00", 0.5),
            unload("O2", "Client", "09:30", 0.495),
            unload("O3", "W2", "09:00", 1.0),
        ];
        let records = classify_deliveries(&f.ledger, &events);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, DeliveryStatus::OnTime);
        // Threshold crossed at 09:30, before the 10:00 deadline.
        assert_eq!(records[1].status, DeliveryStatus::OnTime);
        assert_eq!(records[1].last_unload, Some(time("09:30")));
        // Unloads away from the destination do not count.
        assert_eq!(records[2].status, DeliveryStatus::NotDelivered);
        assert_eq!(records[2].delivered, 0.0);
    }

    #[test]
    fn short_of_threshold_is_not_delivered() {
        let f = fixture();
        let events = vec![unload("O1", "Client", "09:00", 0.98)];
        let records = classify_deliveries(&f.ledger, &events);
        assert_eq!(records[0].status, DeliveryStatus::NotDelivered);
        assert_eq!(records[0].last_unload, Some(time("09:00")));
    }

    #[test]
    fn unload_exactly_at_deadline_is_on_time() {
        let f = fixture();
        let events = vec![unload("O2", "Client", "10:00", 1.0)];
        assert_eq!(classify_deliveries(&f.ledger, &events)[1].status, DeliveryStatus::OnTime);
    }
}
