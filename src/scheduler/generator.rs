//! EM report window generator.
//!
//! # Algorithm
//!
//! **Aseptic** (continuous coverage):
//! 1. `cursor = fill_start − 4h`
//! 2. While `cursor < fill_end`: emit `[cursor, cursor + 4h)` with its
//!    boundary classification, advance cursor one window.
//!
//! Windows are always exactly one duration long — the last one may extend
//! past `fill_end` and is not truncated. No dedicated post-production
//! window is emitted: contamination risk is evaluated throughout filling,
//! not just at the boundaries.
//!
//! **Terminal** (bracketing only): exactly two windows,
//! `[fill_start − 4h, fill_start)` and `[fill_end, fill_end + 4h)`. The
//! product is sterilized after filling, so monitoring only needs to verify
//! the environment immediately around the fill event.
//!
//! # Complexity
//! O(ceil((fill_end − fill_start + 4h) / 4h)) windows; single pass.

use chrono::NaiveDateTime;

use crate::models::{window_duration, ProductType, ReportCategory, ReportSchedule, ReportWindow};

/// How far aseptic coverage runs past the end of filling.
///
/// Historical revisions of this schedule disagreed on the aseptic loop
/// bound; the two observed behaviors are kept as an explicit choice rather
/// than merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AsepticCoverage {
    /// Canonical: stop as soon as a window would start at or after fill
    /// end. Only `BeforeProduction` and `DuringProduction` are emitted.
    #[default]
    StopAtFillEnd,
    /// Extended: continue one duration past fill end, labelling windows
    /// that start at or after fill end as `AfterProduction`.
    ExtendPastFillEnd,
}

/// Classifies one window against the filling interval boundaries.
///
/// A window ending at or before `fill_start` is pre-production; a window
/// starting at or after `fill_end` is post-production; everything else
/// overlaps filling.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use em_schedule::scheduler::classify;
/// use em_schedule::models::ReportCategory;
///
/// let at = |h| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// assert_eq!(classify(at(4), at(8), at(8), at(20)), ReportCategory::BeforeProduction);
/// assert_eq!(classify(at(8), at(12), at(8), at(20)), ReportCategory::DuringProduction);
/// assert_eq!(classify(at(20), at(23), at(8), at(20)), ReportCategory::AfterProduction);
/// ```
pub fn classify(
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    fill_start: NaiveDateTime,
    fill_end: NaiveDateTime,
) -> ReportCategory {
    if window_end <= fill_start {
        ReportCategory::BeforeProduction
    } else if window_start >= fill_end {
        ReportCategory::AfterProduction
    } else {
        ReportCategory::DuringProduction
    }
}

/// Generates EM report schedules for a filling interval.
///
/// Pure and clock-free: identical inputs always yield a structurally
/// identical schedule. Assumes validated inputs (`fill_start < fill_end`);
/// see [`crate::validation`] for the caller-side checks.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use em_schedule::models::ProductType;
/// use em_schedule::scheduler::WindowScheduler;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let scheduler = WindowScheduler::new();
/// let schedule = scheduler.generate(
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(20, 0, 0).unwrap(),
///     ProductType::Aseptic,
/// );
/// assert_eq!(schedule.window_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowScheduler {
    aseptic_coverage: AsepticCoverage,
}

impl WindowScheduler {
    /// Creates a scheduler with canonical aseptic coverage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the aseptic coverage variant.
    pub fn with_aseptic_coverage(mut self, coverage: AsepticCoverage) -> Self {
        self.aseptic_coverage = coverage;
        self
    }

    /// Generates the schedule for a typed product selector.
    pub fn generate(
        &self,
        fill_start: NaiveDateTime,
        fill_end: NaiveDateTime,
        product_type: ProductType,
    ) -> ReportSchedule {
        match product_type {
            ProductType::Aseptic => self.generate_aseptic(fill_start, fill_end),
            ProductType::Terminal => self.generate_terminal(fill_start, fill_end),
        }
    }

    /// Generates the schedule for a raw product label.
    ///
    /// Unrecognized labels yield an empty schedule; the caller displays a
    /// "no reports generated" notice rather than treating it as a failure.
    pub fn generate_labeled(
        &self,
        fill_start: NaiveDateTime,
        fill_end: NaiveDateTime,
        product_label: &str,
    ) -> ReportSchedule {
        match ProductType::parse(product_label) {
            Some(product_type) => self.generate(fill_start, fill_end, product_type),
            None => ReportSchedule::new(),
        }
    }

    fn generate_aseptic(
        &self,
        fill_start: NaiveDateTime,
        fill_end: NaiveDateTime,
    ) -> ReportSchedule {
        let step = window_duration();
        let bound = match self.aseptic_coverage {
            AsepticCoverage::StopAtFillEnd => fill_end,
            AsepticCoverage::ExtendPastFillEnd => fill_end + step,
        };

        let mut windows = Vec::new();
        let mut cursor = fill_start - step;
        let mut sequence: u32 = 1;

        while cursor < bound {
            let window_end = cursor + step;
            let category = classify(cursor, window_end, fill_start, fill_end);
            windows.push(ReportWindow::new(sequence, cursor, category));
            sequence += 1;
            cursor = window_end;
        }

        ReportSchedule::from_windows(windows)
    }

    fn generate_terminal(
        &self,
        fill_start: NaiveDateTime,
        fill_end: NaiveDateTime,
    ) -> ReportSchedule {
        let step = window_duration();
        ReportSchedule::from_windows(vec![
            ReportWindow::new(1, fill_start - step, ReportCategory::BeforeProduction),
            ReportWindow::new(2, fill_end, ReportCategory::AfterProduction),
        ])
    }
}
