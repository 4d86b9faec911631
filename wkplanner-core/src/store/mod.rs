//! Workout storage.
//!
//! A single SQLite table holds every workout. Dates are stored as
//! `YYYY-MM-DD` text so that string comparison in range queries matches
//! calendar order.

mod create;
mod list;
mod schema;
mod toggle;

use std::path::Path;

use rusqlite::{Connection, Row};

use crate::error::PlannerResult;
use crate::workout::Workout;

pub use schema::SCHEMA;

const WORKOUT_COLUMNS: &str = "id, sport_type, duration, distance, date, is_completed, notes";

/// Persistence for workouts, backed by one SQLite connection.
pub struct WorkoutStore {
    conn: Connection,
}

impl WorkoutStore {
    /// Wrap an open connection, creating the table if it does not exist.
    pub fn new(conn: Connection) -> PlannerResult<Self> {
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("workouts schema ready");
        Ok(WorkoutStore { conn })
    }

    /// Open (or create) a database file.
    pub fn open(path: &Path) -> PlannerResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        Self::new(Connection::open(path)?)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> PlannerResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn map_row(row: &Row) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get("id")?,
        sport_type: row.get("sport_type")?,
        duration: row.get("duration")?,
        distance: row.get("distance")?,
        date: row.get("date")?,
        is_completed: row.get::<_, Option<bool>>("is_completed")?.unwrap_or(false),
        notes: row.get("notes")?,
    })
}
