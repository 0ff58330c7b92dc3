// Shared location types

use serde::{Deserialize, Serialize};

/// A street address with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Full street address.
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text notes for the courier (gate codes, floor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Location {
    /// Create a location from address and coordinates.
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
            notes: None,
        }
    }

    /// Attach courier notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Courier position reported for an active order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Unix timestamp of the position fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_skips_absent_notes() {
        let location = Location::new("1 Changi Business Park Crescent", 1.3342, 103.9633);
        let json = serde_json::to_value(&location).unwrap();
        assert!(json.get("notes").is_none());

        let with_notes = location.with_notes("Tower B, level 5");
        let json = serde_json::to_value(&with_notes).unwrap();
        assert_eq!(json["notes"], "Tower B, level 5");
    }

    #[test]
    fn test_coordinates_roundtrip() {
        let raw = r#"{"latitude":1.2923742,"longitude":103.8486029,"updated_at":1638249600}"#;
        let coordinates: Coordinates = serde_json::from_str(raw).unwrap();
        assert_eq!(coordinates.updated_at, Some(1638249600));
        let back = serde_json::to_string(&coordinates).unwrap();
        let again: Coordinates = serde_json::from_str(&back).unwrap();
        assert_eq!(coordinates, again);
    }
}
