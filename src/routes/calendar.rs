//! Calendar page

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use wkplanner_core::MonthGrid;
use wkplanner_core::date_range::DateRange;

use crate::routes::AppError;
use crate::state::AppState;
use crate::templates::CalendarPage;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

#[derive(Deserialize)]
pub struct HomeQuery {
    /// Month to display as YYYY-MM; the current month when absent
    pub month: Option<String>,
}

/// GET / - Render one month of workouts
async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let today = state.today();
    let range = DateRange::from_month_arg(query.month.as_deref(), today)?;

    let workouts = state.store()?.get_in(&range)?;
    let grid = MonthGrid::build(range.from, today, &workouts);

    let page = CalendarPage::new(&grid, &range);
    Ok(Html(page.render()?))
}
