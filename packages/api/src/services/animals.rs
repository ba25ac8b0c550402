use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Animal, CreateAnimal, UpdateAnimal};

/// CRUD façade for `/animals`.
#[derive(Clone)]
pub struct AnimalService {
    http: HttpClient,
}

impl AnimalService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Animal>, ApiError> {
        self.http.get("/animals").await
    }

    pub async fn get(&self, id: &str) -> Result<Animal, ApiError> {
        self.http.get(&format!("/animals/{id}")).await
    }

    pub async fn create(&self, data: &CreateAnimal) -> Result<Animal, ApiError> {
        self.http.post("/animals", data).await
    }

    /// Partial update: only the fields present in `data` change.
    pub async fn update(&self, id: &str, data: &UpdateAnimal) -> Result<Animal, ApiError> {
        self.http.patch(&format!("/animals/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/animals/{id}")).await
    }

    /// All animals belonging to `owner_id`, in the backend's order.
    /// Computed client-side: fetches the full collection and filters.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Animal>, ApiError> {
        let animals = self.list().await?;
        Ok(filter_by_owner(animals, owner_id))
    }
}

fn filter_by_owner(animals: Vec<Animal>, owner_id: &str) -> Vec<Animal> {
    animals
        .into_iter()
        .filter(|animal| animal.owner_id == owner_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn animal(id: &str, owner_id: &str) -> Animal {
        Animal {
            id: id.to_string(),
            name: format!("animal-{id}"),
            species: "dog".to_string(),
            breed: None,
            owner_id: owner_id.to_string(),
            owner: None,
            records: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn filter_keeps_exactly_the_matching_subset_in_order() {
        let animals = vec![
            animal("a1", "o1"),
            animal("a2", "o2"),
            animal("a3", "o1"),
            animal("a4", "o3"),
            animal("a5", "o1"),
        ];

        let filtered = filter_by_owner(animals, "o1");
        let ids: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3", "a5"]);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let animals = vec![animal("a1", "o1")];
        assert!(filter_by_owner(animals, "o9").is_empty());
    }
}
