//! Demo fleet
//!
//! When the backend has no active vehicles the section shows this fixed
//! fleet, one car per class, instead of an empty state.

use serde::Serialize;
use tracing::info;

use super::normalize::{active_display_list, DisplayVehicle};
use super::RawVehicle;

/// Where the displayed list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Backend,
    Demo,
}

fn demo_vehicle(id: i32, class: &str, brand: &str, model: &str, year: i32, seats: i32) -> RawVehicle {
    RawVehicle {
        id,
        class: class.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        seats,
        description: None,
        image_url: None,
        amenities: None,
        is_active: true,
    }
}

/// The five canonical classes
pub fn demo_vehicles() -> Vec<RawVehicle> {
    vec![
        demo_vehicle(1, "Standart", "Skoda", "Octavia", 2021, 4),
        demo_vehicle(2, "Comfort", "Toyota", "Camry", 2022, 4),
        demo_vehicle(3, "Business", "Mercedes-Benz", "E-Class", 2022, 4),
        demo_vehicle(4, "VIP", "Mercedes-Benz", "S-Class", 2023, 3),
        demo_vehicle(5, "Minivan", "Mercedes-Benz", "V-Class", 2022, 7),
    ]
}

/// Active vehicles of `raw`, or the demo fleet when there are none
pub fn display_list_or_demo(raw: &[RawVehicle]) -> (Vec<DisplayVehicle>, CatalogSource) {
    let vehicles = active_display_list(raw);
    if !vehicles.is_empty() {
        return (vehicles, CatalogSource::Backend);
    }

    info!("🚗 No active vehicles among {} records, showing demo fleet", raw.len());
    (active_display_list(&demo_vehicles()), CatalogSource::Demo)
}
