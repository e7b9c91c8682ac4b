//! Patient model
//!
//! Clinical attributes for a patient as loaded from the dataset.

use serde::{Deserialize, Serialize};

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// Parse from string (case-insensitive), None for unrecognized values
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// Clinical attributes that drive plan selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientAttributes {
    /// Age in years
    pub age: i32,
    pub gender: Gender,
    /// Body mass index
    pub bmi: f64,
    /// Basal fasting glucose (mmol/L)
    pub fasting_glucose: f64,
    /// Basal fasting insulin (pmol/L)
    pub fasting_insulin: f64,
}

/// A patient row from the dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Display name
    pub name: String,
    /// Body weight (kg); loaded but not used by plan selection
    pub weight: f64,
    /// HOMA-IR difference; loaded but not used by plan selection
    pub homa_ir_diff: f64,
    pub attributes: PatientAttributes,
}
