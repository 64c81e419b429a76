use serde::Serialize;
use tracing::debug;

/// What the booking form is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "class", rename_all = "camelCase")]
pub enum BookingScope {
    /// Opened from the header or the class list
    Generic,
    /// Opened from a vehicle's detail view
    VehicleClass(String),
}

impl BookingScope {
    pub fn heading(&self) -> String {
        match self {
            BookingScope::Generic => "Заказать трансфер".to_string(),
            BookingScope::VehicleClass(class) => format!("Заказать трансфер: класс {}", class),
        }
    }
}

/// Open/closed state of the booking dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDialog {
    open: Option<BookingScope>,
}

impl BookingDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog; reopening replaces the scope
    pub fn open(&mut self, scope: BookingScope) {
        debug!("📝 Booking dialog opened: {:?}", scope);
        self.open = Some(scope);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn scope(&self) -> Option<&BookingScope> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dialog = BookingDialog::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.scope(), None);
    }

    #[test]
    fn reopening_replaces_the_scope() {
        let mut dialog = BookingDialog::new();
        dialog.open(BookingScope::Generic);
        dialog.open(BookingScope::VehicleClass("VIP".to_string()));
        assert_eq!(dialog.scope(), Some(&BookingScope::VehicleClass("VIP".to_string())));

        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn heading_names_the_class() {
        assert_eq!(
            BookingScope::VehicleClass("Minivan".to_string()).heading(),
            "Заказать трансфер: класс Minivan"
        );
    }
}
