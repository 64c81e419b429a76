//! Vehicle section
//!
//! One mounted instance of the catalog: fetches once, normalizes, then
//! hosts the selection machine and the booking dialog. The fetch is bound to
//! the section's lifetime; dropping the section aborts it and a result that
//! arrives late is discarded.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::demo::{display_list_or_demo, CatalogSource};
use super::fetch::{FetchError, VehicleSource};
use super::normalize::DisplayVehicle;
use super::selection::{HapticFeedback, Selection, SelectionError, View};
use super::RawVehicle;
use crate::booking::{BookingDialog, BookingScope};

/// Shown when there is nothing to display and no error to report
pub const UNAVAILABLE_MESSAGE: &str = "Информация об автопарке временно недоступна. \
    Пожалуйста, свяжитесь с нами для получения актуальной информации.";

type FetchResult = Result<Vec<RawVehicle>, FetchError>;

#[derive(Debug)]
pub enum SectionState {
    /// Fetch in flight; render a loading indicator
    Loading,
    /// Render `message` instead of the catalog
    Unavailable { message: String },
    Ready(Catalog),
}

/// Loaded catalog with its selection and booking dialog
#[derive(Debug)]
pub struct Catalog {
    vehicles: Vec<DisplayVehicle>,
    source: CatalogSource,
    selection: Selection,
    booking: BookingDialog,
}

impl Catalog {
    /// `None` when `vehicles` is empty
    pub fn new(
        vehicles: Vec<DisplayVehicle>,
        source: CatalogSource,
        haptics: Arc<dyn HapticFeedback>,
    ) -> Option<Self> {
        let ids = vehicles.iter().map(|v| v.id.clone()).collect();
        let selection = Selection::new(ids, haptics)?;
        Some(Self {
            vehicles,
            source,
            selection,
            booking: BookingDialog::new(),
        })
    }

    pub fn vehicles(&self) -> &[DisplayVehicle] {
        &self.vehicles
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn view(&self) -> View {
        self.selection.view()
    }

    pub fn active(&self) -> &DisplayVehicle {
        let id = self.selection.active_id();
        // The selection is built from `vehicles`, so the id is always present.
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .unwrap_or(&self.vehicles[0])
    }

    /// Vehicle in detail view, if any
    pub fn detail(&self) -> Option<&DisplayVehicle> {
        self.selection.detail_id().map(|_| self.active())
    }

    pub fn select(&mut self, id: &str) -> Result<&DisplayVehicle, SelectionError> {
        self.selection.select(id)?;
        Ok(self.active())
    }

    pub fn back(&mut self) {
        self.selection.back();
    }

    pub fn show_detail(&mut self) {
        self.selection.show_detail();
    }

    /// Opens the booking dialog scoped to the current view: the active class
    /// in detail view, generic while browsing.
    pub fn order(&mut self) -> &BookingScope {
        let scope = match self.selection.view() {
            View::Detail => BookingScope::VehicleClass(self.active().name.clone()),
            View::Browsing => BookingScope::Generic,
        };
        self.booking.open(scope);
        self.booking.scope().unwrap_or(&BookingScope::Generic)
    }

    pub fn booking(&self) -> &BookingDialog {
        &self.booking
    }

    pub fn booking_mut(&mut self) -> &mut BookingDialog {
        &mut self.booking
    }
}

pub struct VehicleSection {
    state: SectionState,
    pending: Option<oneshot::Receiver<FetchResult>>,
    task: Option<JoinHandle<()>>,
    haptics: Arc<dyn HapticFeedback>,
}

impl VehicleSection {
    /// Starts the fetch on the current tokio runtime
    pub fn mount(source: Arc<dyn VehicleSource>, haptics: Arc<dyn HapticFeedback>) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = source.fetch_vehicles().await;
            if tx.send(result).is_err() {
                debug!("🚗 Vehicle section unmounted before the catalog arrived, discarding it");
            }
        });

        Self {
            state: SectionState::Loading,
            pending: Some(rx),
            task: Some(task),
            haptics,
        }
    }

    pub fn state(&self) -> &SectionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SectionState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            SectionState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn catalog_mut(&mut self) -> Option<&mut Catalog> {
        match &mut self.state {
            SectionState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Applies the fetch result if it already arrived. Returns whether the
    /// section is still loading.
    pub fn poll(&mut self) -> bool {
        if let Some(mut rx) = self.pending.take() {
            match rx.try_recv() {
                Ok(result) => self.apply(result),
                Err(oneshot::error::TryRecvError::Empty) => self.pending = Some(rx),
                Err(oneshot::error::TryRecvError::Closed) => self.apply(Err(interrupted())),
            }
        }
        self.is_loading()
    }

    /// Waits for the fetch to resolve and applies it
    pub async fn resolved(&mut self) -> &SectionState {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or_else(|_| Err(interrupted()));
            self.apply(result);
        }
        &self.state
    }

    fn apply(&mut self, result: FetchResult) {
        self.task = None;
        self.state = match result {
            Ok(raw) => {
                let (vehicles, source) = display_list_or_demo(&raw);
                info!("🚗 Loaded {} vehicles ({:?})", vehicles.len(), source);
                match Catalog::new(vehicles, source, self.haptics.clone()) {
                    Some(catalog) => SectionState::Ready(catalog),
                    None => SectionState::Unavailable {
                        message: UNAVAILABLE_MESSAGE.to_string(),
                    },
                }
            }
            Err(e) => {
                error!("❌ Error fetching vehicles: {}", e);
                SectionState::Unavailable {
                    message: e.user_message(),
                }
            }
        };
    }
}

impl Drop for VehicleSection {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn interrupted() -> FetchError {
    FetchError::Network("catalog fetch ended without a result".to_string())
}
