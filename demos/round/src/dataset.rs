//! Embedded dataset for the demo round.
//!
//! Two warehouses north and south of central Paris, two customers inside the
//! city, and a depot on its western edge.  Three nested zones: greater Paris,
//! the city proper (50 km/h) and a low-emission centre (30 km/h).

pub const MAP_JSON: &str = r#"{
    "zones": [
        {
            "name": "Grand Paris",
            "coordinates": [[48.70, 2.10], [48.70, 2.60], [49.00, 2.60], [49.00, 2.10]],
            "priority": 1,
            "description": "metropolitan area"
        },
        {
            "name": "Paris",
            "coordinates": [[48.815, 2.25], [48.815, 2.42], [48.90, 2.42], [48.90, 2.25]],
            "priority": 3,
            "speed_limit_kmh": 50.0,
            "description": "city proper"
        },
        {
            "name": "ZFE Centre",
            "coordinates": [[48.845, 2.32], [48.845, 2.37], [48.87, 2.37], [48.87, 2.32]],
            "priority": 5,
            "speed_limit_kmh": 30.0,
            "description": "low-emission centre"
        }
    ],
    "delivery_points": [
        { "name": "Depot",          "coordinates": [48.895, 2.24], "type": "home" },
        { "name": "Entrepot Nord",  "coordinates": [48.92,  2.36], "type": "warehouse" },
        { "name": "Entrepot Sud",   "coordinates": [48.80,  2.36], "type": "warehouse" },
        { "name": "Client A",       "coordinates": [48.86,  2.35], "type": "delivery" },
        { "name": "Client B",       "coordinates": [48.85,  2.30], "type": "delivery" }
    ]
}"#;

pub const FLEET_JSON: &str = r#"{
    "vehicles": [
        {
            "name": "Van-1",
            "max_weight_kg": 1200.0,
            "max_volume_m3": 12.0,
            "range_km": 250.0,
            "max_speed_kmh": 90.0,
            "emission_full_km": 0.30,
            "emission_empty_km": 0.18,
            "cost_full_km": 0.90,
            "cost_empty_km": 0.45,
            "fixed_daily_cost": 60.0,
            "air_quality_class": 2,
            "home": "Depot"
        },
        {
            "name": "Truck-1",
            "max_weight_kg": 3500.0,
            "max_volume_m3": 20.0,
            "range_km": 400.0,
            "max_speed_kmh": 80.0,
            "emission_full_km": 0.90,
            "emission_empty_km": 0.60,
            "cost_full_km": 1.50,
            "cost_empty_km": 0.90,
            "fixed_daily_cost": 120.0,
            "air_quality_class": 3,
            "home": "Depot"
        }
    ]
}"#;

pub const ORDERS_JSON: &str = r#"{
    "orders": [
        {
            "id": "BC001",
            "origin": "Entrepot Nord",
            "destination": "Client A",
            "content": { "volume_m3": 2.0, "weight_kg": 300.0, "description": "office chairs" },
            "deadline": "2025-03-10T10:30:00"
        },
        {
            "id": "BC002",
            "origin": "Entrepot Sud",
            "destination": "Client B",
            "content": { "volume_m3": 8.0, "weight_kg": 1800.0, "description": "shelving" },
            "deadline": "2025-03-10T11:00:00"
        },
        {
            "id": "BC003",
            "origin": "Entrepot Nord",
            "destination": "Client B",
            "content": { "volume_m3": 1.5, "weight_kg": 250.0, "description": "printers" },
            "deadline": "2025-03-10T09:15:00"
        }
    ]
}"#;

/// Every order and deadline above falls on this day.
pub const ROUND_DAY: &str = "2025-03-10T00:00:00";
