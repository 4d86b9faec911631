//! Insert new workouts.

use rusqlite::params;

use super::WorkoutStore;
use crate::error::PlannerResult;
use crate::workout::NewWorkout;

impl WorkoutStore {
    /// Insert a workout and return the id the database assigned.
    ///
    /// New workouts always start out not completed.
    pub fn create(&self, workout: &NewWorkout) -> PlannerResult<i64> {
        self.conn.execute(
            "INSERT INTO workouts (sport_type, duration, distance, date, is_completed, notes)
             VALUES (?1, ?2, ?3, ?4, FALSE, ?5)",
            params![
                workout.sport_type,
                workout.duration,
                workout.distance,
                workout.date,
                workout.notes,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, date = %workout.date, sport = %workout.sport_type, "workout created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::Workout;
    use chrono::NaiveDate;

    fn new_workout(day: u32) -> NewWorkout {
        NewWorkout::new("Running", 30, 5.0, NaiveDate::from_ymd_opt(2024, 3, day).unwrap())
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let ids: Vec<i64> = (1..=10)
            .map(|day| store.create(&new_workout(day)).unwrap())
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids {ids:?} not increasing");
        }
    }

    #[test]
    fn created_workout_reads_back_not_completed() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let workout = NewWorkout {
            notes: Some("hill repeats".to_string()),
            ..new_workout(12)
        };
        let id = store.create(&workout).unwrap();

        let stored = store.get(id).unwrap().unwrap();
        assert_eq!(
            stored,
            Workout {
                id,
                sport_type: "Running".to_string(),
                duration: 30,
                distance: 5.0,
                date: workout.date,
                is_completed: false,
                notes: Some("hill repeats".to_string()),
            }
        );
    }

    #[test]
    fn ids_are_not_reused_after_rows_disappear() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let first = store.create(&new_workout(1)).unwrap();
        store
            .connection()
            .execute("DELETE FROM workouts WHERE id = ?1", [first])
            .unwrap();

        let second = store.create(&new_workout(2)).unwrap();
        assert!(second > first);
    }

    #[test]
    fn write_failure_is_a_storage_error() {
        let store = WorkoutStore::open_in_memory().unwrap();
        store.connection().execute_batch("DROP TABLE workouts").unwrap();

        let err = store.create(&new_workout(1)).unwrap_err();
        assert!(matches!(err, crate::error::PlannerError::Storage(_)));
    }
}
