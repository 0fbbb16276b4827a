pub mod calculators;
pub mod config;
pub mod errors;
pub mod models;
pub mod research;
pub mod routes;
pub mod sitemap;
pub mod state;
