//! PostgreSQL connection and migrations

pub mod connection;

pub use connection::DatabaseConnection;
