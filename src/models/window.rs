//! Report window, lifecycle category, and product type models.
//!
//! A report window is a half-open interval [start, start + 4h) labeled with
//! where it falls relative to the production filling interval.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed window length and pre-/post-production offset, in hours.
pub const WINDOW_DURATION_HOURS: i64 = 4;

/// The fixed window length as a `TimeDelta`.
#[inline]
pub fn window_duration() -> TimeDelta {
    TimeDelta::hours(WINDOW_DURATION_HOURS)
}

/// Product category selecting the windowing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    /// Sterile fill: continuous 4-hour coverage from 4h before fill start
    /// until fill end, no dedicated closing window.
    Aseptic,
    /// Sterilized after filling: monitoring only brackets the fill event
    /// (one window before start, one after end).
    Terminal,
}

impl ProductType {
    /// Parses a caller-supplied label.
    ///
    /// Returns `None` for unrecognized labels; the scheduler maps that to
    /// an empty schedule rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use em_schedule::models::ProductType;
    ///
    /// assert_eq!(ProductType::parse("Aseptic"), Some(ProductType::Aseptic));
    /// assert_eq!(ProductType::parse("Terminal"), Some(ProductType::Terminal));
    /// assert_eq!(ProductType::parse("Unknown"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Aseptic" => Some(Self::Aseptic),
            "Terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aseptic => write!(f, "Aseptic"),
            Self::Terminal => write!(f, "Terminal"),
        }
    }
}

/// Lifecycle classification of a window relative to the filling interval.
///
/// Ordered by lifecycle position so grouped output iterates
/// before → during → after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReportCategory {
    /// Window ends at or before filling starts.
    BeforeProduction,
    /// Window overlaps the filling interval.
    DuringProduction,
    /// Window starts at or after filling ends (Terminal, or the extended
    /// aseptic coverage variant).
    AfterProduction,
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeProduction => write!(f, "Before Production"),
            Self::DuringProduction => write!(f, "During Production"),
            Self::AfterProduction => write!(f, "After Production"),
        }
    }
}

/// One fixed-length EM report window.
///
/// Half-open interval: includes `start`, excludes `end`.
///
/// # Invariants
/// - `end == start + 4h` (windows are never clipped)
/// - `sequence` is 1-based and gapless within a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// 1-based set number within the schedule.
    pub sequence: u32,
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (exclusive). Always `start + 4h`.
    pub end: NaiveDateTime,
    /// Lifecycle classification.
    pub category: ReportCategory,
}

impl ReportWindow {
    /// Creates a window one fixed duration long, starting at `start`.
    pub fn new(sequence: u32, start: NaiveDateTime, category: ReportCategory) -> Self {
        Self {
            sequence,
            start,
            end: start + window_duration(),
            category,
        }
    }

    /// Window length (always 4 hours).
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Calendar date of the window start, the summary grouping key.
    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether an instant falls within this window.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_window_is_one_duration_long() {
        let w = ReportWindow::new(1, at(4), ReportCategory::BeforeProduction);
        assert_eq!(w.end, at(8));
        assert_eq!(w.duration(), window_duration());
    }

    #[test]
    fn test_window_contains_is_half_open() {
        let w = ReportWindow::new(1, at(4), ReportCategory::BeforeProduction);
        assert!(w.contains(at(4)));
        assert!(w.contains(at(7)));
        assert!(!w.contains(at(8)));
        assert!(!w.contains(at(3)));
    }

    #[test]
    fn test_start_date() {
        let late = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let w = ReportWindow::new(3, late, ReportCategory::DuringProduction);
        // Starts on Jan 1, ends on Jan 2; grouping follows the start date.
        assert_eq!(w.start_date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(w.end.date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_product_type_parse() {
        assert_eq!(ProductType::parse("Aseptic"), Some(ProductType::Aseptic));
        assert_eq!(ProductType::parse("Terminal"), Some(ProductType::Terminal));
        assert_eq!(ProductType::parse("aseptic"), None);
        assert_eq!(ProductType::parse(""), None);
    }

    #[test]
    fn test_category_display_labels() {
        assert_eq!(ReportCategory::BeforeProduction.to_string(), "Before Production");
        assert_eq!(ReportCategory::DuringProduction.to_string(), "During Production");
        assert_eq!(ReportCategory::AfterProduction.to_string(), "After Production");
    }

    #[test]
    fn test_category_lifecycle_order() {
        assert!(ReportCategory::BeforeProduction < ReportCategory::DuringProduction);
        assert!(ReportCategory::DuringProduction < ReportCategory::AfterProduction);
    }
}
