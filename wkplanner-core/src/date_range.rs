//! Date range for filtering workouts.

use std::ops::RangeInclusive;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{PlannerError, PlannerResult};

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// The calendar month containing `date`, first day through last day.
    pub fn month_of(date: NaiveDate) -> Self {
        let from = first_of_month(date);
        // Day 1 always exists, and one month later always exists for dates
        // chrono can represent, except at the very end of its range.
        let to = from
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        DateRange { from, to }
    }

    /// Parse a month argument into a DateRange.
    /// - `None` selects the month containing `today`
    /// - `Some("YYYY-MM")` selects that month
    pub fn from_month_arg(month: Option<&str>, today: NaiveDate) -> PlannerResult<Self> {
        match month {
            None => Ok(Self::month_of(today)),
            Some(s) => Ok(Self::month_of(parse_month(s)?)),
        }
    }

    /// First day of the previous month.
    pub fn previous_month(&self) -> Option<NaiveDate> {
        first_of_month(self.from).checked_sub_months(Months::new(1))
    }

    /// First day of the following month.
    pub fn next_month(&self) -> Option<NaiveDate> {
        first_of_month(self.from).checked_add_months(Months::new(1))
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Years accepted in a month argument.
const MONTH_YEARS: RangeInclusive<i32> = 1..=9999;

/// Parse YYYY-MM as the first day of that month
fn parse_month(s: &str) -> PlannerResult<NaiveDate> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| PlannerError::invalid("month", format!("'{}', expected YYYY-MM", s)))?;

    if !MONTH_YEARS.contains(&first.year()) {
        return Err(PlannerError::invalid(
            "month",
            format!("'{}', year must be between 1 and 9999", s),
        ));
    }
    Ok(first)
}
