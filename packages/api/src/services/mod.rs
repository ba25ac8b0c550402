//! Typed CRUD façades, one per resource.
//!
//! Each service maps its methods 1:1 onto HTTP calls against a fixed
//! resource path. Relational convenience queries (animals by owner,
//! records by animal) are computed client-side from the full collection;
//! there is no caching, request coalescing, or retry anywhere in this
//! layer, and errors propagate from the HTTP client as-is.

mod animals;
mod owners;
mod records;

pub use animals::AnimalService;
pub use owners::OwnerService;
pub use records::RecordService;
