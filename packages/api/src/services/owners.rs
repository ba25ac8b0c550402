use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{CreateOwner, Owner, UpdateOwner};

/// CRUD façade for `/owners`.
#[derive(Clone)]
pub struct OwnerService {
    http: HttpClient,
}

impl OwnerService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Owner>, ApiError> {
        self.http.get("/owners").await
    }

    pub async fn get(&self, id: &str) -> Result<Owner, ApiError> {
        self.http.get(&format!("/owners/{id}")).await
    }

    pub async fn create(&self, data: &CreateOwner) -> Result<Owner, ApiError> {
        self.http.post("/owners", data).await
    }

    /// Partial update: only the fields present in `data` change.
    pub async fn update(&self, id: &str, data: &UpdateOwner) -> Result<Owner, ApiError> {
        self.http.patch(&format!("/owners/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/owners/{id}")).await
    }
}
