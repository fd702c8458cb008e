pub mod configuration;
pub mod connectors;
pub mod forms;
pub(crate) mod helpers;
mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
