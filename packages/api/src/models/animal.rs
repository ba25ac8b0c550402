use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MedicalRecord, Owner};

/// A pet. References exactly one owner via `owner_id`; the embedded
/// `owner` and `records` are relation projections the backend may include.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<MedicalRecord>>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when registering an animal under an owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimal {
    pub name: String,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub owner_id: String,
}

/// Partial update. Reparenting is not a client operation, so there is no
/// `owner_id` here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_animal_carries_owner_reference() {
        let create = CreateAnimal {
            name: "Rex".to_string(),
            species: "dog".to_string(),
            breed: None,
            owner_id: "o1".to_string(),
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Rex", "species": "dog", "ownerId": "o1" })
        );
    }

    #[test]
    fn partial_update_omits_absent_fields() {
        let update = UpdateAnimal {
            breed: Some("poodle".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "breed": "poodle" }));
    }
}
