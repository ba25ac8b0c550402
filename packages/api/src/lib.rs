//! # API crate: the VetDesk data and session layer
//!
//! Everything between the views and the REST backend lives here. The crate
//! owns the single HTTP choke point, the persisted session, and one typed
//! service per resource; the UI crates never touch the network directly.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL (env-overridable) and the two well-known storage key names |
//! | [`error`] | [`ApiError`] taxonomy: unauthorized, request, connectivity |
//! | [`session`] | Persisted token + user snapshot, session-event stream for the UI |
//! | [`http`] | [`HttpClient`]: auth header injection, error normalization, 401 teardown |
//! | [`models`] | Entities (`User`, `Owner`, `Animal`, `MedicalRecord`) and per-operation DTOs |
//! | [`auth`] | [`AuthService`]: register, login, logout, authentication predicate |
//! | [`services`] | CRUD façades per resource plus client-side relational queries |
//! | [`validate`] | Field-level validation run before any request is dispatched |
//!
//! ## Wiring
//!
//! [`Api::new`] builds the whole layer from an [`ApiConfig`] and a
//! [`store::StorageBackend`] chosen by the platform shell. All handles are
//! cheap to clone and share one session.

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod session;
pub mod validate;

pub use auth::AuthService;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpClient;
pub use models::{
    Animal, CreateAnimal, CreateOwner, CreateRecord, Credentials, LoginResponse, MedicalRecord,
    NewUser, Owner, UpdateAnimal, UpdateOwner, UpdateRecord, User,
};
pub use services::{AnimalService, OwnerService, RecordService};
pub use session::{Session, SessionEvent};
pub use validate::ValidationError;

/// The assembled data layer: one session, one HTTP client, one service per
/// resource. Handed to the UI through context; clones share all state.
#[derive(Clone)]
pub struct Api {
    pub session: Session,
    pub auth: AuthService,
    pub owners: OwnerService,
    pub animals: AnimalService,
    pub records: RecordService,
}

impl Api {
    pub fn new(config: ApiConfig, backend: Arc<dyn store::StorageBackend>) -> Self {
        let session = Session::new(&config, backend);
        let http = HttpClient::new(&config, session.clone());
        Self {
            session,
            auth: AuthService::new(http.clone()),
            owners: OwnerService::new(http.clone()),
            animals: AnimalService::new(http.clone()),
            records: RecordService::new(http),
        }
    }
}
