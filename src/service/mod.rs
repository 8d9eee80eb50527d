//! # Vehicle Service
//!
//! Seam between the HTTP layer and storage. [`VehicleDefault`] forwards
//! every call to its repository unchanged.

use crate::repository::{Average, RepositoryResult, VehicleRepository, VehicleSet};
use crate::vehicle::Vehicle;

/// Vehicle operations exposed to the HTTP layer
pub trait VehicleService: Send + Sync {
    fn find_all(&self) -> RepositoryResult<VehicleSet>;

    fn find_by_color_year(&self, color: &str, year: i32) -> RepositoryResult<VehicleSet>;

    fn find_by_brand_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> RepositoryResult<VehicleSet>;

    fn find_by_brand_average_speed(&self, brand: &str) -> RepositoryResult<Average>;

    fn find_by_fuel_type(&self, fuel_type: &str) -> RepositoryResult<VehicleSet>;

    fn find_by_transmission_type(&self, transmission: &str) -> RepositoryResult<VehicleSet>;

    fn find_by_brand_average_capacity(&self, brand: &str) -> RepositoryResult<Average>;

    fn find_by_weight_range(&self, min_weight: f64, max_weight: f64)
        -> RepositoryResult<VehicleSet>;

    fn find_by_dimension_range(
        &self,
        min_height: f64,
        min_width: f64,
        max_height: f64,
        max_width: f64,
    ) -> RepositoryResult<VehicleSet>;

    /// Store a new vehicle
    fn save(&self, vehicle: Vehicle) -> RepositoryResult<()>;
}

/// Default service delegating to a repository
pub struct VehicleDefault<R: VehicleRepository> {
    rp: R,
}

impl<R: VehicleRepository> VehicleDefault<R> {
    pub fn new(rp: R) -> Self {
        Self { rp }
    }
}

impl<R: VehicleRepository> VehicleService for VehicleDefault<R> {
    fn find_all(&self) -> RepositoryResult<VehicleSet> {
        self.rp.find_all()
    }

    fn find_by_color_year(&self, color: &str, year: i32) -> RepositoryResult<VehicleSet> {
        self.rp.find_by_color_year(color, year)
    }

    fn find_by_brand_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> RepositoryResult<VehicleSet> {
        self.rp.find_by_brand_year_range(brand, start_year, end_year)
    }

    fn find_by_brand_average_speed(&self, brand: &str) -> RepositoryResult<Average> {
        self.rp.find_by_brand_average_speed(brand)
    }

    fn find_by_fuel_type(&self, fuel_type: &str) -> RepositoryResult<VehicleSet> {
        self.rp.find_by_fuel_type(fuel_type)
    }

    fn find_by_transmission_type(&self, transmission: &str) -> RepositoryResult<VehicleSet> {
        self.rp.find_by_transmission_type(transmission)
    }

    fn find_by_brand_average_capacity(&self, brand: &str) -> RepositoryResult<Average> {
        self.rp.find_by_brand_average_capacity(brand)
    }

    fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> RepositoryResult<VehicleSet> {
        self.rp.find_by_weight_range(min_weight, max_weight)
    }

    fn find_by_dimension_range(
        &self,
        min_height: f64,
        min_width: f64,
        max_height: f64,
        max_width: f64,
    ) -> RepositoryResult<VehicleSet> {
        self.rp
            .find_by_dimension_range(min_height, min_width, max_height, max_width)
    }

    fn save(&self, vehicle: Vehicle) -> RepositoryResult<()> {
        self.rp.save(vehicle)
    }
}
