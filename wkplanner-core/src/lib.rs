//! Core types for wkplanner.
//!
//! This crate holds everything the web server builds on:
//! - `Workout` and the form parsing that produces new ones
//! - `store` for the SQLite-backed workout table
//! - `calendar` for laying a month of workouts out as a week grid

pub mod calendar;
pub mod config;
pub mod date_range;
pub mod error;
pub mod form;
pub mod store;
pub mod workout;

pub use calendar::{CalendarDay, MonthGrid};
pub use error::{PlannerError, PlannerResult};
pub use store::WorkoutStore;
pub use workout::{NewWorkout, Workout};
