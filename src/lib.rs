//! nutrisheet library
//!
//! Personalized nutrition targets (BMR, TDEE, macros, hydration) from a
//! biometric profile, and PDF sheets presenting them.

pub mod build_info;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod report;

pub use error::EngineError;
