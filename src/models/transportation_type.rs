use serde::{Deserialize, Serialize};

/// Mode of transportation between two locations. Stored as text in the
/// `transportation` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportationType {
    Flight,
    Train,
    Bus,
    Car,
    Ferry,
    Walk,
}

impl TransportationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportationType::Flight => "FLIGHT",
            TransportationType::Train => "TRAIN",
            TransportationType::Bus => "BUS",
            TransportationType::Car => "CAR",
            TransportationType::Ferry => "FERRY",
            TransportationType::Walk => "WALK",
        }
    }

    pub fn parse(value: &str) -> Option<TransportationType> {
        match value {
            "FLIGHT" => Some(TransportationType::Flight),
            "TRAIN" => Some(TransportationType::Train),
            "BUS" => Some(TransportationType::Bus),
            "CAR" => Some(TransportationType::Car),
            "FERRY" => Some(TransportationType::Ferry),
            "WALK" => Some(TransportationType::Walk),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_db_representation() {
        for ty in [
            TransportationType::Flight,
            TransportationType::Train,
            TransportationType::Bus,
            TransportationType::Car,
            TransportationType::Ferry,
            TransportationType::Walk,
        ] {
            assert_eq!(TransportationType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&TransportationType::Ferry).unwrap();
        assert_eq!(json, "\"FERRY\"");
        let parsed: TransportationType = serde_json::from_str("\"FLIGHT\"").unwrap();
        assert_eq!(parsed, TransportationType::Flight);
    }
}
