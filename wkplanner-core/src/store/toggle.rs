//! Flip workout completion.

use super::WorkoutStore;
use crate::error::PlannerResult;

impl WorkoutStore {
    /// Flip the completion flag of workout `id`.
    ///
    /// An unknown id is not an error; returns whether a row was changed.
    pub fn toggle_completion(&self, id: i64) -> PlannerResult<bool> {
        let changed = self.conn.execute(
            "UPDATE workouts
             SET is_completed = NOT COALESCE(is_completed, FALSE)
             WHERE id = ?1",
            [id],
        )?;

        if changed == 0 {
            tracing::debug!(id, "toggle on unknown workout ignored");
        }
        Ok(changed > 0)
    }
}
