//! Cost, emission, distance and duration of route segments.
//!
//! For a segment driven with load `L`:
//!
//! ```text
//! for (zone, d_m) in decompose(from, to) where d_m > 0:
//!     km        = d_m / 1000
//!     cost     += cost_rate(L)     * km
//!     emission += emission_rate(L) * km
//!     hours    += km / min(max_speed, zone.speed_limit?)
//! ```
//!
//! Stretches outside every zone are not charged.

use fl_core::{LocationId, ZoneId};
use fl_vehicle::Vehicle;

use crate::{PlanResult, RoundContext, Step};

/// Impact of one straight leg between two consecutive stops.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentImpact {
    pub from:        LocationId,
    pub to:          LocationId,
    /// Weight carried on the leg, kg.
    pub load_kg:     f64,
    /// Kilometres per crossed zone, priority order.
    pub zone_km:     Vec<(ZoneId, f64)>,
    pub distance_km: f64,
    pub cost:        f64,
    pub emission:    f64,
    pub duration_h:  f64,
}

impl SegmentImpact {
    pub fn duration_secs(&self) -> f64 {
        self.duration_h * 3_600.0
    }
}

/// Compute the impact of driving `from → to` with `load_kg` on board.
pub fn segment_impact(
    ctx:     &RoundContext<'_>,
    vehicle: &Vehicle,
    from:    &LocationId,
    to:      &LocationId,
    load_kg: f64,
) -> PlanResult<SegmentImpact> {
    let a = ctx.coordinate(from)?;
    let b = ctx.coordinate(to)?;

    let cost_rate = vehicle.cost_rate(load_kg);
    let emission_rate = vehicle.emission_rate(load_kg);

    let mut seg = SegmentImpact {
        from: from.clone(),
        to: to.clone(),
        load_kg,
        zone_km: Vec::new(),
        distance_km: 0.0,
        cost: 0.0,
        emission: 0.0,
        duration_h: 0.0,
    };

    for (zone, metres) in ctx.zones.decompose(a, b).crossed() {
        let km = metres / 1_000.0;
        let speed = ctx.zones.effective_speed(zone, vehicle.max_speed_kmh);
        seg.cost += cost_rate * km;
        seg.emission += emission_rate * km;
        if speed > 0.0 {
            seg.duration_h += km / speed;
        }
        seg.distance_km += km;
        seg.zone_km.push((zone.clone(), km));
    }

    tracing::debug!(
        vehicle = %vehicle.name,
        from = %seg.from,
        to = %seg.to,
        load_kg,
        km = seg.distance_km,
        cost = seg.cost,
        "segment computed"
    );
    Ok(seg)
}

/// Aggregated impact of a committed route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteImpact {
    pub segments:    Vec<SegmentImpact>,
    pub cost:        f64,
    pub emission:    f64,
    pub distance_km: f64,
    pub duration_h:  f64,
}

impl RouteImpact {
    /// One segment per consecutive pair of steps, each driven with the load
    /// recorded when leaving the first stop of the pair.
    pub fn compute(ctx: &RoundContext<'_>, vehicle: &Vehicle, steps: &[Step]) -> PlanResult<Self> {
        let mut impact = RouteImpact::default();
        for pair in steps.windows(2) {
            let seg = segment_impact(
                ctx,
                vehicle,
                pair[0].location(),
                pair[1].location(),
                pair[0].snapshot().weight_kg,
            )?;
            impact.cost += seg.cost;
            impact.emission += seg.emission;
            impact.distance_km += seg.distance_km;
            impact.duration_h += seg.duration_h;
            impact.segments.push(seg);
        }
        Ok(impact)
    }
}
