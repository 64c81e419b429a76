//! Booking intent
//!
//! The dialog that hosts the booking form. The form itself posts to
//! `/api/application-requests`.

pub mod dialog;

pub use dialog::{BookingDialog, BookingScope};
