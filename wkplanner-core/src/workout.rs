//! Workout records.

use chrono::NaiveDate;

/// A persisted workout entry.
///
/// `id` is assigned by the store on creation and never changes. The only
/// mutation the store supports afterwards is flipping `is_completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: i64,
    /// Free-form label, e.g. "Running" or "Swim"
    pub sport_type: String,
    /// Minutes
    pub duration: u32,
    /// Kilometers
    pub distance: f64,
    pub date: NaiveDate,
    pub is_completed: bool,
    pub notes: Option<String>,
}

/// A workout that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub sport_type: String,
    pub duration: u32,
    pub distance: f64,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl NewWorkout {
    pub fn new(sport_type: impl Into<String>, duration: u32, distance: f64, date: NaiveDate) -> Self {
        NewWorkout {
            sport_type: sport_type.into(),
            duration,
            distance,
            date,
            notes: None,
        }
    }
}
