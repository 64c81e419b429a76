//! Storage models
//!
//! Row types as they live in PostgreSQL and travel over the wire.

pub mod application_request;
pub mod settings;
pub mod vehicle;

pub use application_request::ApplicationRequest;
pub use settings::SiteSettings;
pub use vehicle::Vehicle;
