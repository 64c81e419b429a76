//! Controllers
//!
//! Business rules between the HTTP handlers and the stores.

pub mod application_request_controller;
pub mod settings_controller;
pub mod vehicle_controller;
