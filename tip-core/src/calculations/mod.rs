//! Tip calculation modules.
//!
//! This module provides the pure calculation logic shared by the live
//! display and the history ledger.

pub mod common;
pub mod tip;

pub use tip::{TipBreakdown, TipCalculationError, TipCalculator};
