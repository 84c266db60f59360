//! Application layer: services and use cases
//!
//! This layer builds domain structures from settings and renders them as text.

pub mod error;
pub mod render;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use render::Section;
