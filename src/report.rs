//! Plain-text rendering of a report schedule.
//!
//! The schedule and its summary are values; this module owns every
//! formatting decision. Dates render as `DD Mon YYYY`, times as
//! `H:MM AM/PM`. The core never sees a formatted string.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::models::ReportSchedule;

/// Notice shown when the schedule has no windows.
pub const EMPTY_NOTICE: &str = "No reports generated. Check your input and product type.";

/// Formats a calendar date as `DD Mon YYYY` (e.g. `01 Jan 2024`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Formats an instant as `DD Mon YYYY H:MM AM/PM` (e.g. `01 Jan 2024 8:00 AM`).
pub fn format_date_time(instant: NaiveDateTime) -> String {
    instant.format("%d %b %Y %-I:%M %p").to_string()
}

/// Renders the per-category, per-date summary counts.
///
/// Groups appear in lifecycle order (before → during → after), dates
/// ascending within each category.
pub fn render_summary(schedule: &ReportSchedule) -> String {
    let summary = schedule.summary();
    let mut out = String::from("Summary of sets per date:\n");
    for category in summary.categories() {
        let _ = writeln!(out, "  {category}:");
        if let Some(by_date) = summary.dates_for(category) {
            for (&date, &count) in by_date {
                let _ = writeln!(out, "    {}: {} set(s)", format_date(date), count);
            }
        }
    }
    out
}

/// Renders the detailed schedule table, one row per window.
///
/// Columns: set number, start date/time, end date/time, category.
pub fn render_schedule_table(schedule: &ReportSchedule) -> String {
    const TIME_COL_WIDTH: usize = 20;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<TIME_COL_WIDTH$}  {:<TIME_COL_WIDTH$}  {}",
        "Set #", "Start Date/Time", "End Date/Time", "Category"
    );
    for window in &schedule.windows {
        let _ = writeln!(
            out,
            "{:>5}  {:<TIME_COL_WIDTH$}  {:<TIME_COL_WIDTH$}  {}",
            window.sequence,
            format_date_time(window.start),
            format_date_time(window.end),
            window.category
        );
    }
    out
}

/// Renders the complete report: summary, total set count, and table.
///
/// An empty schedule renders the [`EMPTY_NOTICE`] instead.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use em_schedule::models::ProductType;
/// use em_schedule::report::render_report;
/// use em_schedule::scheduler::WindowScheduler;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let schedule = WindowScheduler::new().generate(
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(20, 0, 0).unwrap(),
///     ProductType::Terminal,
/// );
/// let text = render_report(&schedule);
/// assert!(text.contains("Total summary report sets required: 2"));
/// ```
pub fn render_report(schedule: &ReportSchedule) -> String {
    if schedule.is_empty() {
        return format!("Report schedule:\n{EMPTY_NOTICE}\n");
    }
    format!(
        "Report schedule:\n{}Total summary report sets required: {}\n\n{}",
        render_summary(schedule),
        schedule.window_count(),
        render_schedule_table(schedule)
    )
}
