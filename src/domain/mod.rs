//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, pipeline descriptions and domain error types.

pub mod errors;
pub mod pipeline;
pub mod repositories;

pub use errors::DomainError;
pub use pipeline::*;
pub use repositories::*;
