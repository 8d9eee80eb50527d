//! In-memory vehicle repository backed by a `HashMap` behind a `RwLock`.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use crate::vehicle::{Vehicle, VehicleId};

use super::{Average, RepositoryError, RepositoryResult, VehicleRepository, VehicleSet};

/// In-memory vehicle repository
#[derive(Debug, Default)]
pub struct VehicleMap {
    db: RwLock<HashMap<VehicleId, Vehicle>>,
}

impl VehicleMap {
    pub fn new(db: HashMap<VehicleId, Vehicle>) -> Self {
        Self { db: RwLock::new(db) }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, HashMap<VehicleId, Vehicle>>> {
        self.db.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    /// Copy out every vehicle matching `predicate`
    fn select<P>(&self, predicate: P) -> RepositoryResult<VehicleSet>
    where
        P: Fn(&Vehicle) -> bool,
    {
        let db = self.read()?;
        Ok(db
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(id, v)| (*id, v.clone()))
            .collect())
    }

    /// Mean of `metric` over the vehicles of `brand`
    fn brand_average<M>(&self, brand: &str, metric: M) -> RepositoryResult<Average>
    where
        M: Fn(&Vehicle) -> f64,
    {
        let db = self.read()?;
        let (total, samples) = db
            .values()
            .filter(|v| v.attributes.brand == brand)
            .fold((0.0, 0usize), |(total, n), v| (total + metric(v), n + 1));

        if samples == 0 {
            return Ok(Average::default());
        }
        Ok(Average {
            value: total / samples as f64,
            samples,
        })
    }
}

impl VehicleRepository for VehicleMap {
    fn find_all(&self) -> RepositoryResult<VehicleSet> {
        self.select(|_| true)
    }

    fn find_by_color_year(&self, color: &str, year: i32) -> RepositoryResult<VehicleSet> {
        self.select(|v| v.attributes.color == color && v.attributes.fabrication_year == year)
    }

    fn find_by_brand_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> RepositoryResult<VehicleSet> {
        self.select(|v| {
            v.attributes.brand == brand
                && v.attributes.fabrication_year >= start_year
                && v.attributes.fabrication_year <= end_year
        })
    }

    fn find_by_brand_average_speed(&self, brand: &str) -> RepositoryResult<Average> {
        self.brand_average(brand, |v| v.attributes.max_speed)
    }

    fn find_by_fuel_type(&self, fuel_type: &str) -> RepositoryResult<VehicleSet> {
        self.select(|v| v.attributes.fuel_type == fuel_type)
    }

    fn find_by_transmission_type(&self, transmission: &str) -> RepositoryResult<VehicleSet> {
        self.select(|v| v.attributes.transmission == transmission)
    }

    fn find_by_brand_average_capacity(&self, brand: &str) -> RepositoryResult<Average> {
        self.brand_average(brand, |v| f64::from(v.attributes.capacity))
    }

    fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> RepositoryResult<VehicleSet> {
        self.select(|v| v.attributes.weight >= min_weight && v.attributes.weight <= max_weight)
    }

    fn find_by_dimension_range(
        &self,
        min_height: f64,
        min_width: f64,
        max_height: f64,
        max_width: f64,
    ) -> RepositoryResult<VehicleSet> {
        self.select(|v| {
            let d = &v.attributes.dimensions;
            d.height >= min_height
                && d.height <= max_height
                && d.width >= min_width
                && d.width <= max_width
        })
    }

    fn save(&self, vehicle: Vehicle) -> RepositoryResult<()> {
        let mut db = self.db.write().map_err(|_| RepositoryError::LockPoisoned)?;
        db.insert(vehicle.id, vehicle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleAttributes;

    fn vehicle(id: VehicleId, brand: &str, year: i32, speed: f64) -> Vehicle {
        Vehicle::new(
            id,
            VehicleAttributes {
                brand: brand.to_string(),
                fabrication_year: year,
                max_speed: speed,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_find_all_is_a_copy() {
        let repo = VehicleMap::new(HashMap::from([(1, vehicle(1, "Toyota", 2020, 180.0))]));

        let mut copy = repo.find_all().unwrap();
        copy.clear();

        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_overwrites_by_id() {
        let repo = VehicleMap::default();
        repo.save(vehicle(1, "Toyota", 2020, 180.0)).unwrap();
        repo.save(vehicle(1, "Honda", 2021, 170.0)).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[&1].attributes.brand, "Honda");
    }

    #[test]
    fn test_average_without_matches() {
        let repo = VehicleMap::new(HashMap::from([(1, vehicle(1, "Toyota", 2020, 180.0))]));

        let avg = repo.find_by_brand_average_speed("Fiat").unwrap();
        assert_eq!(avg.value, 0.0);
        assert!(avg.is_empty());
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let repo = std::sync::Arc::new(VehicleMap::default());
        let writer = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.db.write().unwrap();
            panic!("poison");
        })
        .join();

        assert!(matches!(repo.find_all(), Err(RepositoryError::LockPoisoned)));
    }
}
