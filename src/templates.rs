//! Server-rendered HTML pages.

use askama::Template;

use wkplanner_core::MonthGrid;
use wkplanner_core::date_range::DateRange;

const MONTH_ARG_FORMAT: &str = "%Y-%m";

/// The home page: one month of workouts.
#[derive(Template)]
#[template(path = "calendar.html")]
pub struct CalendarPage<'a> {
    pub grid: &'a MonthGrid,
    pub title: String,
    /// `?month=` value of the previous month
    pub prev_month: Option<String>,
    pub next_month: Option<String>,
}

impl<'a> CalendarPage<'a> {
    pub fn new(grid: &'a MonthGrid, range: &DateRange) -> Self {
        CalendarPage {
            grid,
            title: grid.title(),
            prev_month: range
                .previous_month()
                .map(|d| d.format(MONTH_ARG_FORMAT).to_string()),
            next_month: range
                .next_month()
                .map(|d| d.format(MONTH_ARG_FORMAT).to_string()),
        }
    }
}

/// The empty "new workout" form.
#[derive(Template)]
#[template(path = "workout_form.html")]
pub struct WorkoutFormPage {
    /// Default for the date input, YYYY-MM-DD
    pub today: String,
}
