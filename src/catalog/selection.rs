//! Selection state machine
//!
//! ```text
//!   Browsing --select(id)--> Detail(id)
//!   Detail(id) --back--> Browsing        (active id retained)
//!   Browsing --show_detail--> Detail(last active id)
//!   Detail(id) --select(id')--> Detail(id')
//! ```
//!
//! The active id always belongs to the list the machine was built from.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Length of the pulse fired on selection
pub const SELECT_PULSE: Duration = Duration::from_millis(50);

/// Vibration on platforms that have it. Side effect only.
pub trait HapticFeedback: Send + Sync {
    fn pulse(&self, duration: Duration);
}

/// For platforms without haptics
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&self, _duration: Duration) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browsing,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("vehicle '{0}' is not in the catalog")]
    UnknownVehicle(String),
}

pub struct Selection {
    ids: Vec<String>,
    active: usize,
    view: View,
    haptics: Arc<dyn HapticFeedback>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("active_id", &self.active_id())
            .field("view", &self.view)
            .finish()
    }
}

impl Selection {
    /// Machine over `ids`, browsing, with the first id active. `None` for an
    /// empty list.
    pub fn new(ids: Vec<String>, haptics: Arc<dyn HapticFeedback>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        Some(Self {
            ids,
            active: 0,
            view: View::Browsing,
            haptics,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    /// Active id while in detail view
    pub fn detail_id(&self) -> Option<&str> {
        match self.view {
            View::Detail => Some(self.active_id()),
            View::Browsing => None,
        }
    }

    /// Makes `id` active and opens its detail view. Valid from both views.
    pub fn select(&mut self, id: &str) -> Result<(), SelectionError> {
        let index = self
            .ids
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| SelectionError::UnknownVehicle(id.to_string()))?;

        self.active = index;
        self.view = View::Detail;
        self.haptics.pulse(SELECT_PULSE);
        debug!("🚗 Selected vehicle {}", id);
        Ok(())
    }

    /// Back to browsing, keeping the active id
    pub fn back(&mut self) {
        self.view = View::Browsing;
    }

    /// Re-enters detail view for the retained active id
    pub fn show_detail(&mut self) {
        self.view = View::Detail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHaptics(AtomicUsize);

    impl HapticFeedback for CountingHaptics {
        fn pulse(&self, duration: Duration) {
            assert_eq!(duration, SELECT_PULSE);
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn ids() -> Vec<String> {
        ["1", "2", "3"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn starts_browsing_with_first_vehicle_active() {
        let selection = Selection::new(ids(), Arc::new(NoHaptics)).unwrap();
        assert_eq!(selection.view(), View::Browsing);
        assert_eq!(selection.active_id(), "1");
        assert_eq!(selection.detail_id(), None);
    }

    #[test]
    fn empty_list_has_no_machine() {
        assert!(Selection::new(Vec::new(), Arc::new(NoHaptics)).is_none());
    }

    #[test]
    fn back_retains_the_last_selected_vehicle() {
        let mut selection = Selection::new(ids(), Arc::new(NoHaptics)).unwrap();
        selection.select("2").unwrap();
        selection.back();
        assert_eq!(selection.view(), View::Browsing);

        selection.show_detail();
        assert_eq!(selection.detail_id(), Some("2"));
    }

    #[test]
    fn reselection_works_from_detail_view() {
        let mut selection = Selection::new(ids(), Arc::new(NoHaptics)).unwrap();
        selection.select("2").unwrap();
        selection.select("3").unwrap();
        assert_eq!(selection.detail_id(), Some("3"));
    }

    #[test]
    fn unknown_id_leaves_state_untouched() {
        let haptics = Arc::new(CountingHaptics::default());
        let mut selection = Selection::new(ids(), haptics.clone()).unwrap();
        selection.select("2").unwrap();
        selection.back();

        let err = selection.select("99").unwrap_err();
        assert_eq!(err, SelectionError::UnknownVehicle("99".to_string()));
        assert_eq!(selection.view(), View::Browsing);
        assert_eq!(selection.active_id(), "2");
        assert_eq!(haptics.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_selection_pulses_once() {
        let haptics = Arc::new(CountingHaptics::default());
        let mut selection = Selection::new(ids(), haptics.clone()).unwrap();
        selection.select("1").unwrap();
        selection.select("3").unwrap();
        selection.back();
        selection.show_detail();
        assert_eq!(haptics.0.load(Ordering::SeqCst), 2);
    }
}
