//! Tax period windows and statutory due dates.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Day of the following month on which GSTR-1 falls due.
const GSTR1_DUE_DAY: u32 = 11;
/// Day of the following month on which GSTR-3B falls due.
const GSTR3B_DUE_DAY: u32 = 20;

/// A half-open filing window `[start, end)`.
///
/// The exclusive end keeps adjacent periods disjoint: an invoice issued
/// on the first of July belongs to July, never to June as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TaxPeriod {
    /// Creates a period from explicit bounds.
    ///
    /// # Returns
    /// * `Err(ValidationError::InvalidPeriod)` if `start >= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the calendar-month period for a filing month.
    ///
    /// # Returns
    /// * `Err(ValidationError::InvalidMonth)` if the month does not exist
    pub fn month(year: i32, month: u32) -> Result<Self, ValidationError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ValidationError::InvalidMonth { year, month })?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or(ValidationError::InvalidMonth { year, month })?;
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// GSTR-1 due date, the 11th of the month after the period.
    #[must_use]
    pub fn gstr1_due_date(&self) -> NaiveDate {
        self.due_date(GSTR1_DUE_DAY)
    }

    /// GSTR-3B due date, the 20th of the month after the period.
    #[must_use]
    pub fn gstr3b_due_date(&self) -> NaiveDate {
        self.due_date(GSTR3B_DUE_DAY)
    }

    /// The statutory day in the month holding the exclusive end bound.
    /// For a calendar month period that is the following month.
    fn due_date(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end.year(), self.end.month(), day).unwrap_or(self.end)
    }
}
