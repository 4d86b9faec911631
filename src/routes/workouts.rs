//! Workout form endpoints

use askama::Template;
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
};

use wkplanner_core::PlannerError;
use wkplanner_core::form::{DATE_FORMAT, ToggleForm, WorkoutForm};

use crate::routes::AppError;
use crate::state::AppState;
use crate::templates::WorkoutFormPage;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workout/new", get(new_workout))
        .route("/workout/save", post(save_workout))
        .route("/workout/toggle", post(toggle_workout))
}

/// GET /workout/new - Render an empty workout form
async fn new_workout(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = WorkoutFormPage {
        today: state.today().format(DATE_FORMAT).to_string(),
    };
    Ok(Html(page.render()?))
}

/// POST /workout/save - Validate and store a workout, then back to the calendar
async fn save_workout(
    State(state): State<AppState>,
    form: Result<Form<WorkoutForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    // Validate everything before touching the database
    let workout = form_fields(form)?.parse()?;

    let id = state.store()?.create(&workout)?;
    tracing::info!(id, date = %workout.date, "workout saved");

    Ok(Redirect::to("/"))
}

/// POST /workout/toggle - Flip completion of one workout
async fn toggle_workout(
    State(state): State<AppState>,
    form: Result<Form<ToggleForm>, FormRejection>,
) -> Result<StatusCode, AppError> {
    let id = form_fields(form)?.parse()?;
    state.store()?.toggle_completion(id)?;
    Ok(StatusCode::OK)
}

/// Undecodable bodies answer 400 like any invalid field.
fn form_fields<T>(form: Result<Form<T>, FormRejection>) -> Result<T, PlannerError> {
    form.map(|Form(fields)| fields)
        .map_err(|rejection| PlannerError::invalid("form", rejection.body_text()))
}
