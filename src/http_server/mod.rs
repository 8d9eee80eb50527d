//! # HTTP Server Module
//!
//! Axum front end for the vehicle service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/vehicles` - List and create vehicles
//! - `/vehicles/color/:color/year/:year`
//! - `/vehicles/brand/:brand/between/:start_year/:end_year`
//! - `/vehicles/average_speed/brand/:brand`
//! - `/vehicles/fuel_type/:type`
//! - `/vehicles/transmission/:type`
//! - `/vehicles/average_capacity/brand/:brand`
//! - `/vehicles/weight?min=&max=`
//! - `/vehicles/dimensions?height=min-max&width=min-max`

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod params;
pub mod response;
pub mod server;
pub mod vehicle_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::Envelope;
pub use server::HttpServer;
pub use vehicle_routes::VehicleState;
