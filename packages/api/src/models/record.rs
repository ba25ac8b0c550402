use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Animal;

/// A single veterinary visit entry, tied to exactly one animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    /// Weight at the visit, as entered ("4.2kg"); the backend keeps it
    /// free-form.
    pub weight: String,
    pub medications: String,
    pub dosage: String,
    pub notes: String,
    pub attended_at: DateTime<Utc>,
    pub animal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<Animal>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new visit entry. All of them are required by the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    pub weight: String,
    pub medications: String,
    pub dosage: String,
    pub notes: String,
    pub attended_at: DateTime<Utc>,
    pub animal_id: String,
}

/// Partial update. A record never moves between animals, so there is no
/// `animal_id` here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attended_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attended_at_round_trips_rfc3339() {
        let record: MedicalRecord = serde_json::from_str(
            r#"{
                "id": "r1",
                "weight": "4.2kg",
                "medications": "antibiotic",
                "dosage": "1x day",
                "notes": "recovering well",
                "attendedAt": "2024-06-10T14:30:00Z",
                "animalId": "a1",
                "createdAt": "2024-06-10T15:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(record.attended_at.to_rfc3339(), "2024-06-10T14:30:00+00:00");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["attendedAt"], "2024-06-10T14:30:00Z");
        assert!(json.get("animal").is_none());
    }

    #[test]
    fn partial_update_omits_absent_fields() {
        let update = UpdateRecord {
            notes: Some("follow-up booked".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "notes": "follow-up booked" }));
    }
}
