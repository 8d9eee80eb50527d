//! # Vehicle Repository
//!
//! Storage seam for vehicles. The in-memory [`VehicleMap`] answers every
//! query with a linear scan; other backends only need to implement
//! [`VehicleRepository`].

pub mod loader;
mod memory;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::vehicle::{Vehicle, VehicleId};

pub use loader::{load_vehicles, LoaderError};
pub use memory::VehicleMap;

/// Defensive copy of matching vehicles, ordered by id
pub type VehicleSet = BTreeMap<VehicleId, Vehicle>;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding the collection lock
    #[error("vehicle collection lock poisoned")]
    LockPoisoned,

    /// No id above the highest stored one is left
    #[error("vehicle id space exhausted")]
    IdsExhausted,
}

/// Arithmetic mean over the vehicles matching a filter.
///
/// `samples` is the number of vehicles averaged; with no samples the
/// value is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Average {
    pub value: f64,
    pub samples: usize,
}

impl Average {
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

/// Vehicle storage operations
pub trait VehicleRepository: Send + Sync {
    /// Every vehicle in the collection
    fn find_all(&self) -> RepositoryResult<VehicleSet>;

    /// Vehicles with exactly this color and fabrication year
    fn find_by_color_year(&self, color: &str, year: i32) -> RepositoryResult<VehicleSet>;

    /// Vehicles of a brand built within `[start_year, end_year]`
    fn find_by_brand_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> RepositoryResult<VehicleSet>;

    /// Mean max speed of a brand
    fn find_by_brand_average_speed(&self, brand: &str) -> RepositoryResult<Average>;

    /// Vehicles using this fuel type
    fn find_by_fuel_type(&self, fuel_type: &str) -> RepositoryResult<VehicleSet>;

    /// Vehicles with this transmission
    fn find_by_transmission_type(&self, transmission: &str) -> RepositoryResult<VehicleSet>;

    /// Mean passenger capacity of a brand
    fn find_by_brand_average_capacity(&self, brand: &str) -> RepositoryResult<Average>;

    /// Vehicles weighing within `[min_weight, max_weight]`
    fn find_by_weight_range(&self, min_weight: f64, max_weight: f64)
        -> RepositoryResult<VehicleSet>;

    /// Vehicles whose height and width both fall inside the bounds
    fn find_by_dimension_range(
        &self,
        min_height: f64,
        min_width: f64,
        max_height: f64,
        max_width: f64,
    ) -> RepositoryResult<VehicleSet>;

    /// Insert or overwrite a vehicle by id
    fn save(&self, vehicle: Vehicle) -> RepositoryResult<()>;
}
