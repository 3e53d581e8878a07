// src/form.rs
use std::collections::HashMap;

use crate::errors::{PredictError, Result};
use crate::models::PredictionRequest;

/// Names of the input controls the form exposes, in request order.
pub const FIELD_NAMES: [&str; 6] = [
    "team1",
    "team2",
    "venue",
    "toss_winner",
    "toss_decision",
    "season",
];

/// Anything that can hand out the current value of a named input control.
pub trait FieldSource {
    fn value(&self, name: &str) -> Option<String>;
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl PredictionRequest {
    /// Reads all six controls. Values are taken as-is; only presence is checked.
    pub fn from_fields(source: &impl FieldSource) -> Result<Self> {
        let read = |name: &str| {
            source
                .value(name)
                .ok_or_else(|| PredictError::MissingField(name.to_string()))
        };

        Ok(PredictionRequest {
            team1: read("team1")?,
            team2: read("team2")?,
            venue: read("venue")?,
            toss_winner: read("toss_winner")?,
            toss_decision: read("toss_decision")?,
            season: read("season")?,
        })
    }
}

/// Collects `name=value` pairs (as given on the command line) into a field map.
/// Items without `=` and names outside [`FIELD_NAMES`] are skipped; a later
/// pair overrides an earlier one.
pub fn parse_field_pairs<I, T>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    pairs
        .into_iter()
        .filter_map(|pair| {
            let (name, value) = pair.as_ref().split_once('=')?;
            FIELD_NAMES
                .contains(&name)
                .then(|| (name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_takes_values_verbatim() {
        let fields = parse_field_pairs([
            "team1= India ",
            "team2=Australia",
            "venue=Eden Gardens, Kolkata",
            "toss_winner=Team 1",
            "toss_decision=field",
            "season=2011/12",
        ]);

        let request = PredictionRequest::from_fields(&fields).unwrap();

        assert_eq!(request.team1, " India ");
        assert_eq!(request.venue, "Eden Gardens, Kolkata");
        assert_eq!(request.season, "2011/12");
    }

    #[test]
    fn test_missing_field() {
        let fields = parse_field_pairs(["team1=India", "team2=Australia"]);
        let err = PredictionRequest::from_fields(&fields).unwrap_err();
        assert!(matches!(err, PredictError::MissingField(ref name) if name == "venue"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let fields = parse_field_pairs([
            "team1=", "team2=", "venue=", "toss_winner=", "toss_decision=", "season=",
        ]);
        let request = PredictionRequest::from_fields(&fields).unwrap();
        assert_eq!(request.team1, "");
    }

    #[test]
    fn test_parse_field_pairs_skips_noise() {
        let fields = parse_field_pairs(["--verbose", "colour=blue", "team1=India", "team1=Sri Lanka", "reason=a=b"]);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("team1").map(String::as_str), Some("Sri Lanka"));
    }
}
