//! Pulsar ML - Rust библиотека

pub mod data;
pub mod error;
pub mod preprocessing;
pub mod sampling;
pub mod types;

pub use data::*;
pub use preprocessing::*;
pub use sampling::*;
pub use types::*;

// Re-export для удобства
pub use error::{Error, Result};
