use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use wkplanner_core::{PlannerResult, WorkoutStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Each request opens its own connection; SQLite serialises the writers
    database: PathBuf,
}

impl AppState {
    pub fn new(database: PathBuf) -> PlannerResult<Self> {
        // Verify the database can be opened (and the schema created) at startup
        let _ = WorkoutStore::open(&database)?;
        Ok(AppState { database })
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    pub fn store(&self) -> PlannerResult<WorkoutStore> {
        WorkoutStore::open(&self.database)
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
