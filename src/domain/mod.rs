//! Domain models and types for plainsight.
//!
//! The domain layer provides:
//! - **PHI types** ([`PhiType`]) — the closed set of recognized tag categories
//! - **Output models** ([`SurrogateRecord`], [`AnonymizedDocument`])
//! - **Error types** ([`PlainsightError`])
//! - **Result type alias** ([`Result`])

pub mod errors;
pub mod phi;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::PlainsightError;
pub use phi::{AnonymizedDocument, PhiType, SeedSource, SurrogateRecord};
pub use result::Result;
