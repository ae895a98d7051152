//! JSON document parsing.
//!
//! Each `parse_*` function accepts any `Read` source (a file, or a
//! `std::io::Cursor` in tests) and returns validated domain objects.

use std::io::Read;

use serde::de::DeserializeOwned;

use fl_core::{Coordinate, DeliveryPoint, PointDirectory, PointKind, SimConfig, Timestamp};
use fl_ledger::{Order, OrderContent};
use fl_vehicle::{Fleet, VehicleBuilder};
use fl_zones::{Zone, ZoneMap};

use crate::records::{FleetDocument, MapDocument, OrdersDocument};
use crate::{DataError, DataResult};

fn read_document<T: DeserializeOwned, R: Read>(what: &'static str, reader: R) -> DataResult<T> {
    serde_json::from_reader(reader).map_err(|source| DataError::Json { what, source })
}

fn coordinate([lat, lon]: [f64; 2]) -> Coordinate {
    Coordinate::new(lat, lon)
}

/// Parse a map document into its delivery points and zones.
pub fn parse_map<R: Read>(reader: R) -> DataResult<(PointDirectory, ZoneMap)> {
    let doc: MapDocument = read_document("map", reader)?;

    let points = doc
        .delivery_points
        .into_iter()
        .map(|p| -> DataResult<DeliveryPoint> {
            let kind = match p.kind.as_deref() {
                Some(s) => s.parse::<PointKind>()?,
                None => PointKind::default(),
            };
            Ok(DeliveryPoint::new(p.name, coordinate(p.coordinates), kind)
                .with_description(p.description))
        })
        .collect::<DataResult<Vec<_>>>()?;
    let points = PointDirectory::new(points)?;

    let zones = doc
        .zones
        .into_iter()
        .map(|z| {
            // A zone with neither ring key ends up empty and is rejected by
            // `ZoneMap::new` as degenerate.
            let ring = z.lat_lon_ring().into_iter().map(coordinate).collect();
            let zone = Zone::new(z.name.clone(), ring, z.effective_priority());
            let zone = match z.effective_speed_limit() {
                Some(kmh) => zone.with_speed_limit(kmh),
                None => zone,
            };
            zone.with_description(z.description)
        })
        .collect();
    let zones = ZoneMap::new(zones)?;

    Ok((points, zones))
}

/// Parse a fleet document.  Every vehicle's home must be one of `points`.
pub fn parse_fleet<R: Read>(reader: R, points: &PointDirectory) -> DataResult<Fleet> {
    let doc: FleetDocument = read_document("fleet", reader)?;

    let mut vehicles = Vec::with_capacity(doc.vehicles.len());
    for v in doc.vehicles {
        let vehicle = VehicleBuilder::new(v.name, v.home)
            .capacity(v.max_weight_kg, v.max_volume_m3)
            .range_km(v.range_km)
            .max_speed_kmh(v.max_speed_kmh)
            .cost_per_km(v.cost_empty_km, v.cost_full_km)
            .emission_per_km(v.emission_empty_km, v.emission_full_km)
            .fixed_daily_cost(v.fixed_daily_cost)
            .air_quality_class(v.air_quality_class)
            .build()?;
        if !points.contains(&vehicle.home) {
            return Err(DataError::UnknownHome {
                vehicle: vehicle.name,
                home:    vehicle.home,
            });
        }
        vehicles.push(vehicle);
    }
    Ok(Fleet::new(vehicles)?)
}

/// Parse an orders document.
///
/// Origins and destinations are checked later, when the ledger is built
/// against the round's delivery points.
pub fn parse_orders<R: Read>(reader: R) -> DataResult<Vec<Order>> {
    let doc: OrdersDocument = read_document("orders", reader)?;

    doc.orders
        .into_iter()
        .map(|o| -> DataResult<Order> {
            let deadline = Timestamp::parse(&o.deadline).map_err(|source| DataError::Deadline {
                order: o.id.clone(),
                source,
            })?;
            let content = OrderContent {
                volume_m3:   o.content.volume_m3,
                weight_kg:   o.content.weight_kg,
                description: o.content.description,
            };
            Ok(Order::new(o.id, o.origin, o.destination, content, deadline))
        })
        .collect()
}

/// Parse a simulation configuration.  Missing fields take their defaults;
/// `start` is in Unix seconds.
pub fn load_config<R: Read>(reader: R) -> DataResult<SimConfig> {
    read_document("config", reader)
}
