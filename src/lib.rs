//! motorpool - vehicle records over HTTP
//!
//! Layers, outermost first:
//! - `http_server`: axum routes, parameter parsing, response envelope
//! - `service`: pass-through seam between HTTP and storage
//! - `repository`: in-memory collection with filter and aggregate scans
//! - `journal`: append-only log of created vehicles

pub mod cli;
pub mod http_server;
pub mod journal;
pub mod repository;
pub mod service;
pub mod vehicle;
