//! Canonical staff record model.

use serde::{Deserialize, Serialize};

/// A canonical staff list entry from the persistence layer.
///
/// Read-only to this engine: records are matched against parsed schedule
/// names to attach metadata such as the minor-worker flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// The persistence-layer identifier.
    pub id: String,
    /// The staff member's canonical name.
    pub name: String,
    /// True when the staff member is under 18.
    #[serde(default)]
    pub is_under_18: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_record_round_trip() {
        let record = StaffRecord {
            id: "stf_001".to_string(),
            name: "Maria Lopez".to_string(),
            is_under_18: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: StaffRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_is_under_18_defaults_to_false() {
        let json = r#"{"id": "stf_002", "name": "Devon Carter"}"#;
        let record: StaffRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_under_18);
    }
}
