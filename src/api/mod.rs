//! API Module
//!
//! HTTP handlers and routing for the tiered cache REST API.
//!
//! # Endpoints
//! - `PUT /put` - Write a key-value pair into every tier
//! - `GET /get/:key` - Look a key up across tiers
//! - `GET /tiers` - Snapshot every tier
//! - `POST /tiers` - Append a tier
//! - `DELETE /tiers/:index` - Remove a tier
//! - `GET /stats` - Chain and per-tier statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
