//! Raw vehicle → display vehicle

use serde::Serialize;

use super::defaults::{feature_icon, FeatureIcon, FEATURES, IMAGES, PRICES};
use super::RawVehicle;

/// Presentation-ready vehicle, derived once per section mount
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayVehicle {
    pub id: String,
    /// Trimmed class, the key into the default dictionaries
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub seats: i32,
    pub description: String,
    pub price: String,
    /// Real photo, if the record has one
    pub image_url: Option<String>,
    /// Class placeholder photo
    pub fallback_image: String,
    pub features: Vec<String>,
    pub is_active: bool,
}

impl DisplayVehicle {
    /// Image to render: the real photo wins over the class placeholder
    pub fn display_image(&self) -> &str {
        self.image_url.as_deref().unwrap_or(&self.fallback_image)
    }

    pub fn has_photo(&self) -> bool {
        self.image_url.is_some()
    }

    /// Badge on the class tab
    pub fn badge(&self) -> Option<&'static str> {
        (self.name == "VIP").then_some("New")
    }

    pub fn title(&self) -> String {
        format!("{} - {} {}", self.name, self.brand, self.model)
    }

    pub fn features_with_icons(&self) -> impl Iterator<Item = (&str, FeatureIcon)> {
        self.features.iter().map(|f| (f.as_str(), feature_icon(f)))
    }
}

/// Maps a raw record to its display form. Total over any input.
pub fn normalize(raw: &RawVehicle) -> DisplayVehicle {
    let class = raw.class.trim();

    let features = match non_empty(raw.amenities.as_deref()) {
        Some(amenities) => amenities.split(';').map(str::to_string).collect(),
        None => FEATURES.get(class).iter().map(|f| f.to_string()).collect(),
    };

    let description = match non_empty(raw.description.as_deref()) {
        Some(description) => description.to_string(),
        None => format!("Комфортабельный автомобиль класса {}.", class),
    };

    DisplayVehicle {
        id: raw.id.to_string(),
        name: class.to_string(),
        brand: raw.brand.clone(),
        model: raw.model.clone(),
        year: raw.year,
        seats: raw.seats,
        description,
        price: PRICES.get(class).to_string(),
        image_url: raw.image_url.clone(),
        fallback_image: IMAGES.get(class).to_string(),
        features,
        is_active: raw.is_active,
    }
}

/// Active vehicles only, normalized, in backend order
pub fn active_display_list(raw: &[RawVehicle]) -> Vec<DisplayVehicle> {
    raw.iter().filter(|v| v.is_active).map(normalize).collect()
}

/// Empty strings behave like missing values
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(class: &str) -> RawVehicle {
        RawVehicle {
            id: 7,
            class: class.to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "E-Class".to_string(),
            year: 2022,
            seats: 4,
            description: None,
            image_url: None,
            amenities: None,
            is_active: true,
        }
    }

    #[test]
    fn class_is_trimmed_before_lookup() {
        let display = normalize(&raw("  Business "));
        assert_eq!(display.name, "Business");
        assert_eq!(display.price, "от 350.00 EUR");
        assert_eq!(display.fallback_image, *IMAGES.get("Business"));
        assert_eq!(display.features.len(), 6);
        assert_eq!(display.id, "7");
    }

    #[test]
    fn unknown_class_gets_generic_defaults() {
        let display = normalize(&raw("Limousine"));
        assert_eq!(display.price, *PRICES.default_entry());
        assert_eq!(display.fallback_image, *IMAGES.default_entry());
        assert!(display.features.is_empty());
        assert_eq!(display.description, "Комфортабельный автомобиль класса Limousine.");
    }

    #[test]
    fn amenities_override_class_features_in_order() {
        let display = normalize(&RawVehicle {
            amenities: Some("Wi-Fi;Климат-контроль".to_string()),
            ..raw("Limousine")
        });
        assert_eq!(display.features, vec!["Wi-Fi", "Климат-контроль"]);
    }

    #[test]
    fn empty_amenities_fall_back_to_class_features() {
        let display = normalize(&RawVehicle {
            amenities: Some(String::new()),
            ..raw("Comfort")
        });
        assert_eq!(display.features[0], "Просторный салон");
    }

    #[test]
    fn image_resolution_keeps_both_tiers() {
        let placeholder = normalize(&raw("VIP"));
        assert!(!placeholder.has_photo());
        assert_eq!(placeholder.display_image(), placeholder.fallback_image);
        assert_eq!(placeholder.badge(), Some("New"));

        let photo = normalize(&RawVehicle {
            image_url: Some("https://cdn.example.com/s-class.jpg".to_string()),
            ..raw("VIP")
        });
        assert!(photo.has_photo());
        assert_eq!(photo.display_image(), "https://cdn.example.com/s-class.jpg");
        assert_eq!(photo.fallback_image, *IMAGES.get("VIP"));
    }

    #[test]
    fn inactive_vehicles_are_not_displayed() {
        let list = active_display_list(&[
            raw("Comfort"),
            RawVehicle { id: 8, is_active: false, ..raw("VIP") },
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Comfort");
    }

    #[test]
    fn explicit_description_is_kept() {
        let display = normalize(&RawVehicle {
            description: Some("Седан бизнес-класса".to_string()),
            ..raw("Business")
        });
        assert_eq!(display.description, "Седан бизнес-класса");
        assert_eq!(display.title(), "Business - Mercedes-Benz E-Class");
    }
}
