//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod demo;

pub use demo::{DemoService, GraphRequest};
