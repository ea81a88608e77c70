//! Environmental monitoring (EM) report window scheduling.
//!
//! Computes a schedule of fixed 4-hour EM report windows surrounding a
//! production filling interval. Two product categories carry different
//! windowing rules: aseptic fills need continuous coverage bracketing the
//! fill with no gap, while terminally sterilized fills only need one window
//! immediately before and one immediately after the fill event.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProductType`, `ReportCategory`,
//!   `ReportWindow`, `ReportSchedule`, `ScheduleSummary`
//! - **`scheduler`**: `WindowScheduler`, the window generator, plus the
//!   pure boundary classification function
//! - **`validation`**: Caller-side input checks (instant parsing, ordering)
//! - **`report`**: Plain-text rendering of a schedule and its summary
//!
//! # Architecture
//!
//! The generator is a pure, total function over validated inputs: identical
//! inputs always produce an identical schedule, and no error can originate
//! inside it. Input parsing and rendering are thin collaborators kept at the
//! crate edges so the core stays clock-free and I/O-free.

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
