//! Window generation.
//!
//! `WindowScheduler` turns a validated filling interval and product type
//! into an ordered report schedule.
//!
//! # Algorithm
//!
//! Aseptic mode walks forward in fixed 4-hour steps from 4h before fill
//! start until fill end; Terminal mode emits exactly two windows bracketing
//! the fill. Classification of each window against the interval boundaries
//! is a standalone pure function, [`classify`].

mod generator;

pub use generator::{classify, AsepticCoverage, WindowScheduler};
