//! Simulation time model.
//!
//! # Design
//!
//! Two representations of time coexist:
//!
//! - [`Timestamp`] — absolute wall-clock seconds (Unix epoch, naive UTC).
//!   Departure times, deadlines and event times use it.
//! - [`Tick`] — the simulator's monotonically increasing step counter.
//!
//! The mapping is held in [`SimClock`]:
//!
//!   wall_time = start + tick * tick_duration_secs
//!
//! Using an integer tick as the loop variable keeps the replay exact (no
//! floating-point drift in the clock) while travel times can still be
//! fractional seconds inside each vehicle's countdown.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};

use crate::{CoreError, CoreResult};

/// Dataset timestamp format (`2025-03-10T14:30:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SECS_PER_DAY: i64 = 86_400;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Timestamp ────────────────────────────────────────────────────────────────

/// Wall-clock time in whole seconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Parse a dataset timestamp (`YYYY-MM-DDTHH:MM:SS`).
    pub fn parse(s: &str) -> CoreResult<Timestamp> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(|dt| Timestamp(dt.and_utc().timestamp()))
            .map_err(|_| CoreError::InvalidTimestamp(s.to_owned()))
    }

    /// Midnight of the day containing `self`.
    #[inline]
    pub fn start_of_day(self) -> Timestamp {
        Timestamp(self.0.div_euclid(SECS_PER_DAY) * SECS_PER_DAY)
    }

    /// `hh:mm:ss` on the same day as `self`.
    #[inline]
    pub fn at_time_of_day(self, hours: u32, minutes: u32, seconds: u32) -> Timestamp {
        let offset = hours as i64 * 3_600 + minutes as i64 * 60 + seconds as i64;
        Timestamp(self.start_of_day().0 + offset)
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub fn secs_of_day(self) -> i64 {
        self.0.rem_euclid(SECS_PER_DAY)
    }

    #[inline]
    pub fn plus_secs(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.format(TIMESTAMP_FORMAT)),
            None => write!(f, "@{}s", self.0),
        }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and wall-clock timestamps.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Wall-clock time of tick 0.
    pub start: Timestamp,
    /// Simulated seconds per tick.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start: Timestamp, tick_duration_secs: u32) -> Self {
        Self {
            start,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Wall-clock time of the current tick.
    #[inline]
    pub fn now(&self) -> Timestamp {
        self.time_of(self.current_tick)
    }

    /// Wall-clock time of an arbitrary tick.
    #[inline]
    pub fn time_of(&self, tick: Tick) -> Timestamp {
        self.start.plus_secs(tick.0 as i64 * self.tick_duration_secs as i64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.now())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Replay configuration.
///
/// Defaults: one tick per simulated minute, start at 08:00 of the reference
/// day, an eight-hour horizon, and a five-minute retry when a vehicle has to
/// wait for stock.  Applications anchor the start to their dataset's day with
/// [`SimConfig::starting_on`] or load the whole struct from JSON (`serde`
/// feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Wall-clock time of tick 0.
    pub start: Timestamp,

    /// Simulated seconds per tick.  Must be non-zero.
    pub tick_duration_secs: u32,

    /// Length of the replay window in seconds.
    pub horizon_secs: u64,

    /// Delay before a waiting vehicle re-checks stock at its current stop.
    pub wait_retry_secs: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start:              Timestamp(8 * 3_600),
            tick_duration_secs: 60,
            horizon_secs:       8 * 3_600,
            wait_retry_secs:    300,
        }
    }
}

impl SimConfig {
    /// Default configuration starting at 08:00 on the day of `day`.
    pub fn starting_on(day: Timestamp) -> Self {
        Self {
            start: day.at_time_of_day(8, 0, 0),
            ..Self::default()
        }
    }

    /// The tick at which the replay ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        let tick = self.tick_duration_secs.max(1) as u64;
        Tick(self.horizon_secs.div_ceil(tick))
    }

    /// Wall-clock end of the replay window.
    #[inline]
    pub fn end_time(&self) -> Timestamp {
        self.start.plus_secs(self.horizon_secs as i64)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start, self.tick_duration_secs)
    }
}
