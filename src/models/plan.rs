//! Diet plan model
//!
//! Plan codes, templates, and resolved recommendations.

use serde::{Deserialize, Serialize};

/// Intermittent fasting diet plan code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DietCode {
    /// Continuous Energy Restriction
    Cer,
    /// Intermittent Energy Restriction (5:2)
    Ier,
    /// Daily Morning Fasting
    Dmf,
    /// Fasting Every Second Day
    Fesd,
}

impl DietCode {
    /// Every plan code in the catalog
    pub const ALL: [DietCode; 4] = [DietCode::Cer, DietCode::Ier, DietCode::Dmf, DietCode::Fesd];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietCode::Cer => "CER",
            DietCode::Ier => "IER",
            DietCode::Dmf => "DMF",
            DietCode::Fesd => "FESD",
        }
    }

    /// Parse from string (case-insensitive), None for unrecognized codes
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CER" => Some(DietCode::Cer),
            "IER" => Some(DietCode::Ier),
            "DMF" => Some(DietCode::Dmf),
            "FESD" => Some(DietCode::Fesd),
            _ => None,
        }
    }
}

/// A fixed diet plan template
///
/// Templates are static data, initialized at compile time and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DietPlanTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub meal_timings: &'static str,
    pub recommended_foods: &'static str,
    pub fasting_schedule: &'static str,
}

/// A resolved diet recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendation {
    pub code: DietCode,
    pub name: String,
    pub description: String,
    pub meal_timings: String,
    pub recommended_foods: String,
    pub fasting_schedule: String,
}
