use serde::{Deserialize, Serialize};

/// Lifecycle status of a trip. Stored as text in the `trips` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "PLANNED",
            TripStatus::InProgress => "IN_PROGRESS",
            TripStatus::Completed => "COMPLETED",
            TripStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<TripStatus> {
        match value {
            "PLANNED" => Some(TripStatus::Planned),
            "IN_PROGRESS" => Some(TripStatus::InProgress),
            "COMPLETED" => Some(TripStatus::Completed),
            "CANCELLED" => Some(TripStatus::Cancelled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_db_representation() {
        for status in [
            TripStatus::Planned,
            TripStatus::InProgress,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ] {
            assert_eq!(TripStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert_eq!(TripStatus::parse("ON_HOLD"), None);
    }

    #[test]
    fn test_wire_format_is_screaming_snake_case() {
        let json = serde_json::to_string(&TripStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: TripStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, TripStatus::Cancelled);
    }
}
