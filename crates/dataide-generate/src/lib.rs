//! Dataset suppliers.
//!
//! A [`DatasetSupplier`] turns a prompt into a [`DatasetPayload`]. Failures
//! are ordinary `Err` values; [`generate_payload`] substitutes the seeded
//! synthetic dataset and records a caveat instead of failing.
//!
//! [`DatasetPayload`]: dataide_model::DatasetPayload

pub mod erd;
pub mod error;
pub mod generate;
pub mod supplier;
pub mod synthetic;

pub use erd::render_mermaid_erd;
pub use error::{GenerationError, Result};
pub use generate::{GenerateOptions, generate_payload};
pub use supplier::{DatasetSupplier, FileSupplier, validate_payload};
pub use synthetic::{DEFAULT_SEED, SYNTHETIC_CAVEAT, SyntheticSupplier, synthetic_payload};
