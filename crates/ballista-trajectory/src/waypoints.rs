//! Validation of raw waypoint documents.
//!
//! The waypoint source delivers a JSON array such as
//! `[{"lat": 40.7, "lon": -74.0}, ...]`. Entries are checked one by one so a
//! missing or non-numeric coordinate is reported with its index instead of
//! being dropped, which would silently shift the arc timing.

use ballista_geo::GeoPoint;
use serde_json::Value;

use crate::TrajectoryError;

/// Parse and validate a JSON waypoint list.
///
/// Only structure and numeric types are checked here; range checks happen in
/// [`TrajectoryBuilder::build`](crate::TrajectoryBuilder::build). Extra fields
/// on an entry are ignored.
///
/// # Errors
///
/// - [`TrajectoryError::Source`] if the text is not valid JSON or not an array.
/// - [`TrajectoryError::MalformedWaypoint`] if an entry is not an object with
///   numeric `lat` and `lon`.
/// - [`TrajectoryError::InsufficientWaypoints`] if fewer than two entries remain.
pub fn parse_waypoints(json: &str) -> Result<Vec<GeoPoint>, TrajectoryError> {
    let entries: Vec<Value> = serde_json::from_str(json).map_err(TrajectoryError::Source)?;

    if entries.len() < 2 {
        return Err(TrajectoryError::InsufficientWaypoints {
            count: entries.len(),
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

fn parse_entry(index: usize, entry: &Value) -> Result<GeoPoint, TrajectoryError> {
    let Value::Object(fields) = entry else {
        return Err(TrajectoryError::MalformedWaypoint {
            index,
            reason: format!("expected an object, found {}", kind(entry)),
        });
    };

    let coord = |name: &str| -> Result<f64, TrajectoryError> {
        match fields.get(name) {
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| TrajectoryError::MalformedWaypoint {
                index,
                reason: format!("`{name}` is not representable as f64"),
            }),
            Some(other) => Err(TrajectoryError::MalformedWaypoint {
                index,
                reason: format!("`{name}` must be a number, found {}", kind(other)),
            }),
            None => Err(TrajectoryError::MalformedWaypoint {
                index,
                reason: format!("missing `{name}`"),
            }),
        }
    };

    Ok(GeoPoint::new(coord("lat")?, coord("lon")?))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_index(result: Result<Vec<GeoPoint>, TrajectoryError>) -> usize {
        match result {
            Err(TrajectoryError::MalformedWaypoint { index, .. }) => index,
            other => panic!("expected MalformedWaypoint, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_ordered_list() {
        let json = r#"[
            {"lat": 0, "lon": 0},
            {"lat": 12.5, "lon": -45.25, "alt": 3},
            {"lat": -3, "lon": 179.9}
        ]"#;
        let points = parse_waypoints(json).unwrap();
        assert_eq!(
            points,
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(12.5, -45.25),
                GeoPoint::new(-3.0, 179.9),
            ]
        );
    }

    #[test]
    fn test_missing_coordinate() {
        let json = r#"[{"lat": 0, "lon": 0}, {"lat": 1}]"#;
        assert_eq!(malformed_index(parse_waypoints(json)), 1);
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let json = r#"[{"lat": "north", "lon": 0}, {"lat": 1, "lon": 2}]"#;
        assert_eq!(malformed_index(parse_waypoints(json)), 0);
    }

    #[test]
    fn test_null_coordinate() {
        let json = r#"[{"lat": 1, "lon": 2}, {"lat": 3, "lon": 4}, {"lat": 5, "lon": null}]"#;
        assert_eq!(malformed_index(parse_waypoints(json)), 2);
    }

    #[test]
    fn test_entry_not_an_object() {
        let json = r#"[{"lat": 1, "lon": 2}, [3, 4]]"#;
        assert_eq!(malformed_index(parse_waypoints(json)), 1);
    }

    #[test]
    fn test_document_not_an_array() {
        for json in [r#"{"lat": 1, "lon": 2}"#, "42", "null"] {
            assert!(
                matches!(parse_waypoints(json), Err(TrajectoryError::Source(_))),
                "{json} should be rejected as a document error"
            );
        }
    }

    #[test]
    fn test_too_few_entries() {
        assert!(matches!(
            parse_waypoints("[]"),
            Err(TrajectoryError::InsufficientWaypoints { count: 0 })
        ));
        assert!(matches!(
            parse_waypoints(r#"[{"lat": 1, "lon": 2}]"#),
            Err(TrajectoryError::InsufficientWaypoints { count: 1 })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_waypoints("[{lat: 1"),
            Err(TrajectoryError::Source(_))
        ));
    }
}
