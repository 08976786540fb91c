//! Trajectory construction error types.

/// Errors raised while turning waypoints into a flight path.
#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    /// Fewer than two waypoints were supplied; a path needs at least one segment.
    #[error("need at least 2 waypoints to build a trajectory, got {count}")]
    InsufficientWaypoints {
        /// Number of waypoints actually supplied.
        count: usize,
    },

    /// A waypoint is missing a coordinate, is non-numeric, or is out of range.
    #[error("waypoint {index} is malformed: {reason}")]
    MalformedWaypoint {
        /// Position of the offending entry in the source list.
        index: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The waypoint document itself could not be parsed.
    #[error("failed to parse waypoint source")]
    Source(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_source_detail_is_not_repeated() {
        let json_err = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        let detail = json_err.to_string();
        let err = TrajectoryError::Source(json_err);
        assert_eq!(err.to_string(), "failed to parse waypoint source");
        assert_eq!(err.source().map(|s| s.to_string()), Some(detail));
    }
}
