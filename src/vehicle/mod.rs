//! # Vehicle Model
//!
//! Domain types for vehicles and the flat JSON form used on the wire,
//! in seed files and in the creation journal.

use serde::{Deserialize, Serialize};

/// Identifier of a vehicle in the collection
pub type VehicleId = i64;

/// Physical dimensions of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Everything about a vehicle except its identifier
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Passenger count
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub dimensions: Dimensions,
}

/// A vehicle stored in the collection
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub attributes: VehicleAttributes,
}

impl Vehicle {
    pub fn new(id: VehicleId, attributes: VehicleAttributes) -> Self {
        Self { id, attributes }
    }
}

/// Flat JSON representation of a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDoc {
    #[serde(default)]
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub year: i32,
    pub passengers: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Keys a creation payload must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 13] = [
    "brand",
    "model",
    "registration",
    "color",
    "year",
    "passengers",
    "max_speed",
    "fuel_type",
    "transmission",
    "weight",
    "height",
    "length",
    "width",
];

impl From<VehicleDoc> for Vehicle {
    fn from(doc: VehicleDoc) -> Self {
        Vehicle {
            id: doc.id,
            attributes: VehicleAttributes {
                brand: doc.brand,
                model: doc.model,
                registration: doc.registration,
                color: doc.color,
                fabrication_year: doc.year,
                capacity: doc.passengers,
                max_speed: doc.max_speed,
                fuel_type: doc.fuel_type,
                transmission: doc.transmission,
                weight: doc.weight,
                dimensions: Dimensions {
                    height: doc.height,
                    length: doc.length,
                    width: doc.width,
                },
            },
        }
    }
}

impl From<&Vehicle> for VehicleDoc {
    fn from(vehicle: &Vehicle) -> Self {
        let a = &vehicle.attributes;
        VehicleDoc {
            id: vehicle.id,
            brand: a.brand.clone(),
            model: a.model.clone(),
            registration: a.registration.clone(),
            color: a.color.clone(),
            year: a.fabrication_year,
            passengers: a.capacity,
            max_speed: a.max_speed,
            fuel_type: a.fuel_type.clone(),
            transmission: a.transmission.clone(),
            weight: a.weight,
            height: a.dimensions.height,
            length: a.dimensions.length,
            width: a.dimensions.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doc_uses_wire_keys() {
        let vehicle = Vehicle::new(
            7,
            VehicleAttributes {
                brand: "Toyota".to_string(),
                fabrication_year: 2020,
                capacity: 5,
                max_speed: 180.0,
                dimensions: Dimensions {
                    height: 1.5,
                    length: 4.2,
                    width: 1.8,
                },
                ..Default::default()
            },
        );

        let value = serde_json::to_value(VehicleDoc::from(&vehicle)).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["year"], 2020);
        assert_eq!(value["passengers"], 5);
        assert_eq!(value["max_speed"], 180.0);
        assert_eq!(value["width"], 1.8);
        assert!(value.get("dimensions").is_none());
    }

    #[test]
    fn test_doc_without_id_defaults_to_zero() {
        let doc: VehicleDoc = serde_json::from_value(json!({
            "brand": "Ford", "model": "Focus", "registration": "AB-123",
            "color": "red", "year": 2015, "passengers": 5, "max_speed": 190.5,
            "fuel_type": "gasoline", "transmission": "manual", "weight": 1300.0,
            "height": 1.4, "length": 4.3, "width": 1.8
        }))
        .unwrap();

        let vehicle = Vehicle::from(doc);
        assert_eq!(vehicle.id, 0);
        assert_eq!(vehicle.attributes.capacity, 5);
        assert_eq!(vehicle.attributes.dimensions.length, 4.3);
    }
}
