//! Class-keyed display defaults
//!
//! Image, price and feature list per vehicle class. Every dictionary carries
//! a mandatory default entry, so a lookup always resolves.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// Map from vehicle class to `V` with a fallback for unknown classes
#[derive(Debug, Clone)]
pub struct ClassDictionary<V> {
    entries: HashMap<&'static str, V>,
    default: V,
}

impl<V> ClassDictionary<V> {
    pub fn new(default: V, entries: impl IntoIterator<Item = (&'static str, V)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            default,
        }
    }

    /// Entry for `class`, or the default entry
    pub fn get(&self, class: &str) -> &V {
        self.entries.get(class).unwrap_or(&self.default)
    }

    pub fn default_entry(&self) -> &V {
        &self.default
    }
}

const STANDART_FEATURES: &[&str] = &[
    "Кондиционер",
    "Комфортабельные сиденья",
    "Wi-Fi",
    "Зарядные устройства",
    "Бутилированная вода",
    "Удобный багажник",
];

const COMFORT_FEATURES: &[&str] = &[
    "Просторный салон",
    "Климат-контроль",
    "Wi-Fi",
    "Зарядные устройства",
    "Бутилированная вода",
    "Большой багажник",
];

const BUSINESS_FEATURES: &[&str] = &[
    "Кожаный салон",
    "Мультизонный климат-контроль",
    "Массаж сидений",
    "Wi-Fi",
    "Мини-бар",
    "Премиальная аудиосистема",
];

const VIP_FEATURES: &[&str] = &[
    "Эксклюзивный кожаный салон",
    "Интеллектуальный климат-контроль",
    "Массаж и вентиляция сидений",
    "Wi-Fi высокоскоростной",
    "Персональный мини-бар",
    "Аудиосистема премиум-класса",
    "Шумоизоляция",
];

const MINIVAN_FEATURES: &[&str] = &[
    "Просторный салон",
    "Комфортабельные сиденья",
    "Климат-контроль",
    "Wi-Fi",
    "Зарядные устройства",
    "Большое багажное отделение",
    "Складные столики",
];

lazy_static! {
    pub static ref IMAGES: ClassDictionary<&'static str> = ClassDictionary::new(
        "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&w=2070&q=80",
        [
            ("Standart", "https://images.unsplash.com/photo-1590362891991-f776e747a588?auto=format&fit=crop&w=1169&q=80"),
            ("Comfort", "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&w=2070&q=80"),
            ("Business", "https://images.unsplash.com/photo-1549399542-7e8f2e928464?auto=format&fit=crop&w=2069&q=80"),
            ("VIP", "https://images.unsplash.com/photo-1553440569-bcc63803a83d?auto=format&fit=crop&w=1025&q=80"),
            ("Minivan", "https://images.unsplash.com/photo-1468818438311-4bab781ab9b8?auto=format&fit=crop&w=2071&q=80"),
        ],
    );

    pub static ref PRICES: ClassDictionary<&'static str> = ClassDictionary::new(
        "от 300.00 EUR",
        [
            ("Standart", "от 250.00 EUR"),
            ("Comfort", "от 250.00 EUR"),
            ("Business", "от 350.00 EUR"),
            ("VIP", "от 500.00 EUR"),
            ("Minivan", "от 500.00 EUR"),
        ],
    );

    /// Amenities shown when the record carries none; unknown classes get none
    pub static ref FEATURES: ClassDictionary<&'static [&'static str]> = ClassDictionary::new(
        &[],
        [
            ("Standart", STANDART_FEATURES),
            ("Comfort", COMFORT_FEATURES),
            ("Business", BUSINESS_FEATURES),
            ("VIP", VIP_FEATURES),
            ("Minivan", MINIVAN_FEATURES),
        ],
    );
}

/// Icon drawn next to a feature in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Wifi,
    Users,
    Briefcase,
    Leaf,
    Coffee,
    Check,
}

lazy_static! {
    static ref FEATURE_ICONS: HashMap<&'static str, FeatureIcon> = HashMap::from([
        ("Wi-Fi", FeatureIcon::Wifi),
        ("Wi-Fi высокоскоростной", FeatureIcon::Wifi),
        ("Просторный салон", FeatureIcon::Users),
        ("Кожаный салон", FeatureIcon::Briefcase),
        ("Эксклюзивный кожаный салон", FeatureIcon::Briefcase),
        ("Климат-контроль", FeatureIcon::Leaf),
        ("Мультизонный климат-контроль", FeatureIcon::Leaf),
        ("Интеллектуальный климат-контроль", FeatureIcon::Leaf),
        ("Бутилированная вода", FeatureIcon::Coffee),
        ("Мини-бар", FeatureIcon::Coffee),
        ("Персональный мини-бар", FeatureIcon::Coffee),
    ]);
}

/// Icon for `feature`; anything unlisted gets a check mark
pub fn feature_icon(feature: &str) -> FeatureIcon {
    FEATURE_ICONS.get(feature).copied().unwrap_or(FeatureIcon::Check)
}
