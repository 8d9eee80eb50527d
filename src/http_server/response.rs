//! # Response Formatting
//!
//! Success envelope shared by every vehicle endpoint.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::repository::VehicleSet;
use crate::vehicle::{VehicleDoc, VehicleId};

/// `{"message": "success", "data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success",
            data,
        }
    }
}

/// Vehicles in wire form, keyed by id
pub type VehicleDocs = BTreeMap<VehicleId, VehicleDoc>;

pub fn to_docs(vehicles: &VehicleSet) -> VehicleDocs {
    vehicles
        .iter()
        .map(|(id, v)| (*id, VehicleDoc::from(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Vehicle, VehicleAttributes};

    #[test]
    fn test_envelope_keys_by_id() {
        let mut set = VehicleSet::new();
        set.insert(
            4,
            Vehicle::new(
                4,
                VehicleAttributes {
                    color: "black".to_string(),
                    ..Default::default()
                },
            ),
        );

        let json = serde_json::to_value(Envelope::success(to_docs(&set))).unwrap();
        assert_eq!(json["message"], "success");
        assert_eq!(json["data"]["4"]["color"], "black");
    }
}
