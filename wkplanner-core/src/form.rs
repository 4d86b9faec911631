//! Parsing of submitted workout forms.
//!
//! Each field is parsed on its own and yields either a typed value or an
//! `InvalidField` error naming the field, so the caller can answer 400 with
//! a precise message.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{PlannerError, PlannerResult};
use crate::workout::NewWorkout;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw fields of the "new workout" form, exactly as submitted.
///
/// Missing fields deserialize to empty strings and are rejected by
/// [`WorkoutForm::parse`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WorkoutForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub sport_type: String,
    #[serde(default)]
    pub notes: String,
}

impl WorkoutForm {
    pub fn parse(&self) -> PlannerResult<NewWorkout> {
        Ok(NewWorkout {
            date: parse_date(&self.date)?,
            duration: parse_duration(&self.duration)?,
            distance: parse_distance(&self.distance)?,
            sport_type: parse_sport_type(&self.sport_type)?,
            notes: parse_notes(&self.notes),
        })
    }
}

/// Raw fields of the completion toggle form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub id: String,
}

impl ToggleForm {
    pub fn parse(&self) -> PlannerResult<i64> {
        parse_id(&self.id)
    }
}

pub fn parse_date(input: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        PlannerError::invalid("date", format!("'{}', expected a real date as YYYY-MM-DD", input))
    })
}

/// Whole minutes, zero allowed.
pub fn parse_duration(input: &str) -> PlannerResult<u32> {
    let minutes: i64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid("duration", format!("'{}' is not a whole number", input)))?;

    if minutes < 0 {
        return Err(PlannerError::invalid("duration", "must not be negative"));
    }

    u32::try_from(minutes).map_err(|_| PlannerError::invalid("duration", "too large"))
}

/// Kilometers, zero allowed.
pub fn parse_distance(input: &str) -> PlannerResult<f64> {
    let km: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid("distance", format!("'{}' is not a number", input)))?;

    // "NaN" and "inf" parse as f64 but are not distances
    if !km.is_finite() {
        return Err(PlannerError::invalid("distance", format!("'{}' is not a number", input)));
    }
    if km < 0.0 {
        return Err(PlannerError::invalid("distance", "must not be negative"));
    }

    Ok(km)
}

pub fn parse_sport_type(input: &str) -> PlannerResult<String> {
    let sport = input.trim();
    if sport.is_empty() {
        return Err(PlannerError::invalid("sport type", "is required"));
    }
    Ok(sport.to_string())
}

pub fn parse_notes(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

pub fn parse_id(input: &str) -> PlannerResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid("workout ID", format!("'{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> WorkoutForm {
        WorkoutForm {
            date: "2024-02-29".to_string(),
            duration: "45".to_string(),
            distance: "10.5".to_string(),
            sport_type: "Running".to_string(),
            notes: "tempo intervals".to_string(),
        }
    }

    fn field_of(err: PlannerError) -> &'static str {
        match err {
            PlannerError::InvalidField { field, .. } => field,
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn parses_complete_form() {
        let workout = form().parse().unwrap();
        assert_eq!(workout.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(workout.duration, 45);
        assert_eq!(workout.distance, 10.5);
        assert_eq!(workout.sport_type, "Running");
        assert_eq!(workout.notes.as_deref(), Some("tempo intervals"));
    }

    #[test]
    fn rejects_impossible_date() {
        let mut f = form();
        f.date = "2024-02-30".to_string();
        assert_eq!(field_of(f.parse().unwrap_err()), "date");
    }

    #[test]
    fn rejects_wrong_date_layout() {
        for bad in ["29/02/2024", "2024-02", "", "yesterday"] {
            assert!(parse_date(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn duration_must_be_non_negative_integer() {
        assert_eq!(parse_duration("0").unwrap(), 0);
        assert_eq!(parse_duration(" 90 ").unwrap(), 90);
        assert_eq!(field_of(parse_duration("-5").unwrap_err()), "duration");
        assert_eq!(field_of(parse_duration("1.5").unwrap_err()), "duration");
        assert_eq!(field_of(parse_duration("").unwrap_err()), "duration");
    }

    #[test]
    fn distance_must_be_finite_and_non_negative() {
        assert_eq!(parse_distance("0").unwrap(), 0.0);
        assert_eq!(parse_distance("42.195").unwrap(), 42.195);
        assert!(parse_distance("-0.1").is_err());
        assert!(parse_distance("NaN").is_err());
        assert!(parse_distance("inf").is_err());
        assert!(parse_distance("ten").is_err());
    }

    #[test]
    fn blank_sport_type_is_rejected() {
        let mut f = form();
        f.sport_type = "   ".to_string();
        assert_eq!(field_of(f.parse().unwrap_err()), "sport type");
    }

    #[test]
    fn sport_type_is_trimmed() {
        assert_eq!(parse_sport_type("  Swim ").unwrap(), "Swim");
    }

    #[test]
    fn blank_notes_become_none() {
        assert_eq!(parse_notes(""), None);
        assert_eq!(parse_notes("  \n"), None);
        assert_eq!(parse_notes("easy"), Some("easy".to_string()));
    }

    #[test]
    fn toggle_form_parses_id() {
        let f = ToggleForm { id: "17".to_string() };
        assert_eq!(f.parse().unwrap(), 17);

        let f = ToggleForm { id: "abc".to_string() };
        assert_eq!(field_of(f.parse().unwrap_err()), "workout ID");
    }
}
