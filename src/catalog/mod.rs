//! Vehicle catalog
//!
//! fetch → normalize → browse/select → order. The layers, leaf to root:
//!
//! - [`fetch`]: the `VehicleSource` seam and its error taxonomy
//! - [`defaults`] and [`normalize`]: class-keyed defaults and display records
//! - [`demo`]: the fleet shown when the backend has no active vehicles
//! - [`selection`]: browsing/detail state machine
//! - [`section`]: one mounted catalog tying the above together

pub mod defaults;
pub mod demo;
pub mod fetch;
pub mod normalize;
pub mod section;
pub mod selection;

/// Vehicle record as served by `GET /api/vehicles`
pub use crate::models::Vehicle as RawVehicle;

pub use demo::CatalogSource;
pub use fetch::{FetchError, VehicleSource};
pub use normalize::{normalize, DisplayVehicle};
pub use section::{Catalog, SectionState, VehicleSection};
pub use selection::{HapticFeedback, NoHaptics, Selection, View};
