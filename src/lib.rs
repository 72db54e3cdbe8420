pub mod api;
pub mod engine;
pub mod entities;
pub mod error;
pub mod places;
pub mod pricing;
pub mod routes;
pub mod server;
pub mod vehicles;
