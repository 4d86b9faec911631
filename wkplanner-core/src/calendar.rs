//! Month calendar grid.
//!
//! Lays a month out as Sunday-first weeks of seven days, the way it is
//! rendered on the home page. Leading days come from the previous month and
//! trailing days from the next one.

use chrono::{Datelike, Days, NaiveDate};

use crate::date_range::first_of_month;
use crate::workout::Workout;

/// Upper bound on rows in a month view.
pub const MAX_WEEKS: usize = 6;

/// One cell of the calendar grid.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Workouts whose date is exactly this day
    pub workouts: Vec<Workout>,
    pub is_today: bool,
    /// False for leading/trailing days borrowed from neighbouring months
    pub in_month: bool,
}

impl CalendarDay {
    pub fn day_number(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    /// First day of the displayed month
    pub month: NaiveDate,
    /// Each week holds exactly seven days, Sunday through Saturday
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`.
    ///
    /// `workouts` is normally the result of a range query for that month;
    /// anything falling outside the emitted days is ignored.
    pub fn build(reference: NaiveDate, today: NaiveDate, workouts: &[Workout]) -> Self {
        let month = first_of_month(reference);
        let lead = u64::from(month.weekday().num_days_from_sunday());
        let mut current = month - Days::new(lead);

        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        for week in 0..MAX_WEEKS {
            let mut days = Vec::with_capacity(7);
            for _ in 0..7 {
                days.push(CalendarDay {
                    date: current,
                    workouts: workouts_on(workouts, current),
                    is_today: current == today,
                    in_month: current.month() == month.month() && current.year() == month.year(),
                });
                current = current + Days::new(1);
            }
            weeks.push(days);

            // At least five rows are always emitted; stop once the next day
            // has left the month.
            if current.month() != month.month() && week >= 4 {
                break;
            }
        }

        MonthGrid { month, weeks }
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// Human-readable month title, e.g. "February 2024".
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }
}

fn workouts_on(workouts: &[Workout], date: NaiveDate) -> Vec<Workout> {
    workouts.iter().filter(|w| w.date == date).cloned().collect()
}
