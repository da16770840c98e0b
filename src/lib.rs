pub mod client;
pub mod configuration;
pub mod database;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
