//! Data models
//!
//! Rust structs representing patients and diet plans.

mod patient;
mod plan;

pub use patient::{Gender, PatientAttributes, PatientRecord};
pub use plan::{DietCode, DietPlanTemplate, DietRecommendation};
