//! Database schema for the workouts table.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sport_type TEXT NOT NULL,
    duration INTEGER NOT NULL,
    distance REAL NOT NULL,
    date DATE NOT NULL,
    is_completed BOOLEAN DEFAULT FALSE,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date);
"#;
