//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "bootstrap a package from a manifest".

pub mod generate_service;

pub use generate_service::{GenerateService, GenerationReport};
