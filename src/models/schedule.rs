//! Schedule container and grouped count summary.
//!
//! A schedule is the ordered sequence of report windows produced by one
//! generator invocation. It is constructed fresh per invocation and not
//! mutated afterwards; the summary is derived on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::window::{ReportCategory, ReportWindow};

/// An ordered sequence of EM report windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchedule {
    /// Windows in sequence order.
    pub windows: Vec<ReportWindow>,
}

impl ReportSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-ordered window list.
    pub fn from_windows(windows: Vec<ReportWindow>) -> Self {
        Self { windows }
    }

    /// Number of windows (the "total report sets required").
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Whether the schedule has no windows.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Finds the window with a given set number.
    pub fn window(&self, sequence: u32) -> Option<&ReportWindow> {
        self.windows.iter().find(|w| w.sequence == sequence)
    }

    /// Returns all windows in a given category, in sequence order.
    pub fn windows_in_category(&self, category: ReportCategory) -> Vec<&ReportWindow> {
        self.windows
            .iter()
            .filter(|w| w.category == category)
            .collect()
    }

    /// Derives the per-category, per-date count summary.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_windows(&self.windows)
    }
}

/// Grouped window counts: category → calendar date of window start → count.
///
/// Both levels are `BTreeMap` so iteration (and serialization) order is
/// deterministic: categories in lifecycle order, dates ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    counts: BTreeMap<ReportCategory, BTreeMap<NaiveDate, usize>>,
}

impl ScheduleSummary {
    /// Groups windows by `(category, start date)` and counts each group.
    pub fn from_windows(windows: &[ReportWindow]) -> Self {
        let mut counts: BTreeMap<ReportCategory, BTreeMap<NaiveDate, usize>> = BTreeMap::new();
        for w in windows {
            *counts
                .entry(w.category)
                .or_default()
                .entry(w.start_date())
                .or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for one `(category, date)` group (0 if absent).
    pub fn count(&self, category: ReportCategory, date: NaiveDate) -> usize {
        self.counts
            .get(&category)
            .and_then(|by_date| by_date.get(&date))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all group counts. Always equals the schedule's window count.
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .flat_map(|by_date| by_date.values())
            .sum()
    }

    /// Iterates groups in (category, date) order.
    pub fn iter(&self) -> impl Iterator<Item = (ReportCategory, NaiveDate, usize)> + '_ {
        self.counts.iter().flat_map(|(&category, by_date)| {
            by_date
                .iter()
                .map(move |(&date, &count)| (category, date, count))
        })
    }

    /// Categories present in the summary, in lifecycle order.
    pub fn categories(&self) -> impl Iterator<Item = ReportCategory> + '_ {
        self.counts.keys().copied()
    }

    /// Per-date counts for one category, if any window fell in it.
    pub fn dates_for(&self, category: ReportCategory) -> Option<&BTreeMap<NaiveDate, usize>> {
        self.counts.get(&category)
    }
}
