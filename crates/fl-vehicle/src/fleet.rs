//! `Fleet`: every vehicle of a round, in dataset order.
//!
//! Dataset order is the simulator's evaluation order, so it is kept as-is;
//! name lookups go through a side index.

use std::collections::BTreeMap;

use fl_core::{CoreError, VehicleId};

use crate::{builder, Vehicle, VehicleError, VehicleResult};

#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    index:    BTreeMap<VehicleId, usize>,
}

impl Fleet {
    /// Validate every vehicle and reject duplicate names.
    pub fn new(vehicles: Vec<Vehicle>) -> VehicleResult<Self> {
        let mut index = BTreeMap::new();
        for (i, v) in vehicles.iter().enumerate() {
            builder::check(v)?;
            if index.insert(v.name.clone(), i).is_some() {
                return Err(CoreError::DuplicateName {
                    what: "vehicle",
                    name: v.name.to_string(),
                }
                .into());
            }
        }
        Ok(Self { vehicles, index })
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        self.index.get(name).map(|&i| &self.vehicles[i])
    }

    /// Like [`get`](Self::get) but with a typed error.
    pub fn vehicle(&self, name: &str) -> VehicleResult<&Vehicle> {
        self.get(name).ok_or_else(|| VehicleError::UnknownVehicle(VehicleId::from(name)))
    }

    /// Position of `name` in fleet order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Vehicles in fleet (evaluation) order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &VehicleId> {
        self.vehicles.iter().map(|v| &v.name)
    }
}
