use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{CreateRecord, MedicalRecord, UpdateRecord};

/// CRUD façade for `/records`.
#[derive(Clone)]
pub struct RecordService {
    http: HttpClient,
}

impl RecordService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<MedicalRecord>, ApiError> {
        self.http.get("/records").await
    }

    pub async fn get(&self, id: &str) -> Result<MedicalRecord, ApiError> {
        self.http.get(&format!("/records/{id}")).await
    }

    pub async fn create(&self, data: &CreateRecord) -> Result<MedicalRecord, ApiError> {
        self.http.post("/records", data).await
    }

    /// Partial update: only the fields present in `data` change.
    pub async fn update(&self, id: &str, data: &UpdateRecord) -> Result<MedicalRecord, ApiError> {
        self.http.patch(&format!("/records/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/records/{id}")).await
    }

    /// All records for `animal_id`, most recent visit first. Callers rely
    /// on this ordering for display, so it is part of the service contract.
    pub async fn list_by_animal(&self, animal_id: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        let records = self.list().await?;
        Ok(newest_first(records, animal_id))
    }
}

fn newest_first(records: Vec<MedicalRecord>, animal_id: &str) -> Vec<MedicalRecord> {
    let mut records: Vec<MedicalRecord> = records
        .into_iter()
        .filter(|record| record.animal_id == animal_id)
        .collect();
    records.sort_by(|a, b| b.attended_at.cmp(&a.attended_at));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, animal_id: &str, day: u32) -> MedicalRecord {
        MedicalRecord {
            id: id.to_string(),
            weight: "4.2kg".to_string(),
            medications: "none".to_string(),
            dosage: "-".to_string(),
            notes: "routine".to_string(),
            attended_at: Utc.with_ymd_and_hms(2024, 6, day, 10, 0, 0).unwrap(),
            animal_id: animal_id.to_string(),
            animal: None,
            created_at: Utc.with_ymd_and_hms(2024, 6, day, 11, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sorts_descending_by_attended_at_for_any_input_order() {
        let permutations = [
            vec![
                record("r1", "a1", 3),
                record("r2", "a1", 9),
                record("r3", "a1", 6),
            ],
            vec![
                record("r2", "a1", 9),
                record("r3", "a1", 6),
                record("r1", "a1", 3),
            ],
            vec![
                record("r3", "a1", 6),
                record("r1", "a1", 3),
                record("r2", "a1", 9),
            ],
        ];

        for input in permutations {
            let sorted = newest_first(input, "a1");
            let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["r2", "r3", "r1"]);
        }
    }

    #[test]
    fn filters_to_the_requested_animal() {
        let records = vec![
            record("r1", "a1", 1),
            record("r2", "a2", 2),
            record("r3", "a1", 3),
        ];

        let sorted = newest_first(records, "a1");
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);
    }

    #[test]
    fn equal_timestamps_keep_relative_order() {
        let records = vec![record("r1", "a1", 5), record("r2", "a1", 5)];
        let sorted = newest_first(records, "a1");
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }
}
