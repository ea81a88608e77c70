//! EM scheduling domain models.
//!
//! Provides the core data types for representing an EM report schedule:
//! the product type selector, the per-window lifecycle category, the
//! fixed-length report window, and the schedule container with its
//! per-category/per-date count summary.
//!
//! # Time Model
//!
//! Instants are local wall-clock date-times (`chrono::NaiveDateTime`);
//! timezone resolution belongs to whatever parsed the input. Every window
//! is exactly [`WINDOW_DURATION_HOURS`] hours long and is never clipped
//! to the filling interval.

mod schedule;
mod window;

pub use schedule::{ReportSchedule, ScheduleSummary};
pub use window::{window_duration, ProductType, ReportCategory, ReportWindow, WINDOW_DURATION_HOURS};
