//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type identifying the calendar month a
//! payroll calculation belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Earliest accepted period year.
pub const MIN_PERIOD_YEAR: i32 = 2000;

/// Latest accepted period year.
pub const MAX_PERIOD_YEAR: i32 = 2100;

/// A monthly pay period.
///
/// Construct through [`PayPeriod::new`] so the month and year are validated.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(3, 2025).unwrap();
/// assert_eq!(period.to_string(), "3/2025");
/// assert!(PayPeriod::new(13, 2025).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The year of the pay period.
    pub year: i32,
    /// The month of the pay period (1-12).
    pub month: u32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1-12 and years outside
    /// [`MIN_PERIOD_YEAR`]..=[`MAX_PERIOD_YEAR`].
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::validation(
                "period_month",
                format!("must be between 1 and 12, got {}", month),
            ));
        }

        if !(MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&year) {
            return Err(EngineError::validation(
                "period_year",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_PERIOD_YEAR, MAX_PERIOD_YEAR, year
                ),
            ));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
