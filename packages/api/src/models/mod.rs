//! Entities and per-operation DTOs.
//!
//! Entities are received from the backend and kept as plain records; IDs
//! are server-assigned opaque strings. Wire names are camelCase. Update
//! DTOs are all-optional and skip absent fields during serialization, so a
//! partial update never synthesizes values the caller did not supply.

mod animal;
mod owner;
mod record;
mod user;

pub use animal::{Animal, CreateAnimal, UpdateAnimal};
pub use owner::{CreateOwner, Owner, UpdateOwner};
pub use record::{CreateRecord, MedicalRecord, UpdateRecord};
pub use user::{Credentials, LoginResponse, NewUser, User};
