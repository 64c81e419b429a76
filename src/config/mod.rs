//! Configuration
//!
//! Environment variables (optionally from `.env`) and database pool sizing.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
