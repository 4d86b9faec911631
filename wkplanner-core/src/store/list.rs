//! Query workouts.

use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

use super::{WORKOUT_COLUMNS, WorkoutStore, map_row};
use crate::date_range::DateRange;
use crate::error::PlannerResult;
use crate::workout::Workout;

impl WorkoutStore {
    /// All workouts dated within `[start, end]`, newest date first.
    ///
    /// Workouts sharing a date come back newest id first. An inverted range
    /// yields nothing.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> PlannerResult<Vec<Workout>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC, id DESC"
        ))?;

        let rows = stmt.query_map(params![start, end], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get_in(&self, range: &DateRange) -> PlannerResult<Vec<Workout>> {
        self.get_range(range.from, range.to)
    }

    pub fn get(&self, id: i64) -> PlannerResult<Option<Workout>> {
        let workout = self
            .conn
            .query_row(
                &format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1"),
                [id],
                map_row,
            )
            .optional()?;
        Ok(workout)
    }
}
