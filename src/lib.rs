//! Royal Transfer site backend
//!
//! REST API for the transfer-booking site (vehicles, application requests,
//! site settings) and the vehicle catalog core consumed by the site's UI.

pub mod booking;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
