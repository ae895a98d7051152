//! Raw JSON records, exactly as they appear in the dataset files.

use serde::Deserialize;

// ── Map ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MapDocument {
    #[serde(alias = "ZONES", default)]
    pub zones:           Vec<ZoneRecord>,
    #[serde(alias = "DELIVERY_POINTS")]
    pub delivery_points: Vec<PointRecord>,
}

/// A zone entry.
///
/// Current documents carry `coordinates` as `[lat, lon]` with a flat
/// `priority` and `speed_limit_kmh`.  Legacy documents carry `coordonnees`
/// as `[lon, lat]`, the priority in `style.zIndex` and the speed limit in
/// `parameters.vitesse_maximale`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneRecord {
    #[serde(alias = "nom")]
    pub name:            String,
    #[serde(default)]
    pub coordinates:     Option<Vec<[f64; 2]>>,
    #[serde(rename = "coordonnees", default)]
    pub lon_lat_ring:    Option<Vec<[f64; 2]>>,
    #[serde(alias = "priorite", default)]
    pub priority:        Option<i32>,
    #[serde(default)]
    pub speed_limit_kmh: Option<f64>,
    #[serde(default)]
    pub style:           Option<StyleRecord>,
    #[serde(default)]
    pub parameters:      Option<ZoneParametersRecord>,
    #[serde(default)]
    pub description:     String,
}

/// Display attributes of a legacy zone; only the stacking order is used.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRecord {
    #[serde(rename = "zIndex", default)]
    pub z_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneParametersRecord {
    #[serde(alias = "vitesse_maximale", default)]
    pub speed_limit_kmh: Option<f64>,
}

impl ZoneRecord {
    /// Outer ring as `[lat, lon]` pairs, whichever key carried it.
    pub fn lat_lon_ring(&self) -> Vec<[f64; 2]> {
        match (&self.coordinates, &self.lon_lat_ring) {
            (Some(ring), _) => ring.clone(),
            (None, Some(ring)) => ring.iter().map(|&[lon, lat]| [lat, lon]).collect(),
            (None, None) => Vec::new(),
        }
    }

    pub fn effective_priority(&self) -> i32 {
        self.priority
            .or_else(|| self.style.as_ref().and_then(|s| s.z_index))
            .unwrap_or(0)
    }

    pub fn effective_speed_limit(&self) -> Option<f64> {
        self.speed_limit_kmh
            .or_else(|| self.parameters.as_ref().and_then(|p| p.speed_limit_kmh))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointRecord {
    #[serde(alias = "nom")]
    pub name:        String,
    /// `[lat, lon]`.
    #[serde(alias = "coordonnees")]
    pub coordinates: [f64; 2],
    /// `home`, `warehouse` or `delivery`; warehouse when absent.
    #[serde(rename = "type", default)]
    pub kind:        Option<String>,
    #[serde(default)]
    pub description: String,
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct FleetDocument {
    #[serde(alias = "fleet", alias = "Vehicules")]
    pub vehicles: Vec<VehicleRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    #[serde(alias = "nom")]
    pub name:              String,
    #[serde(alias = "charge_max_emport_kg")]
    pub max_weight_kg:     f64,
    #[serde(alias = "volume_max_emport_m3")]
    pub max_volume_m3:     f64,
    #[serde(alias = "autonomie_charge_km")]
    pub range_km:          f64,
    #[serde(alias = "vitesse_max")]
    pub max_speed_kmh:     f64,
    #[serde(alias = "impact_km_charge_co2")]
    pub emission_full_km:  f64,
    #[serde(alias = "impact_km_vide_co2")]
    pub emission_empty_km: f64,
    #[serde(alias = "cout_utilisation_km_charge")]
    pub cost_full_km:      f64,
    #[serde(alias = "cout_utilisation_km_vide")]
    pub cost_empty_km:     f64,
    #[serde(alias = "cout_fixe_utilisation_journalier", default)]
    pub fixed_daily_cost:  f64,
    #[serde(alias = "crit_air", default)]
    pub air_quality_class: u8,
    #[serde(alias = "storage_point")]
    pub home:              String,
}

// ── Orders ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersDocument {
    #[serde(alias = "ORDERS")]
    pub orders: Vec<OrderRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id:          String,
    #[serde(alias = "start")]
    pub origin:      String,
    #[serde(alias = "end")]
    pub destination: String,
    pub content:     ContentRecord,
    /// `YYYY-MM-DDTHH:MM:SS`.
    #[serde(alias = "delivery_time")]
    pub deadline:    String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRecord {
    pub volume_m3:   f64,
    #[serde(alias = "poids_kg")]
    pub weight_kg:   f64,
    #[serde(default)]
    pub description: String,
}
