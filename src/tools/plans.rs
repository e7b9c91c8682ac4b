//! Diet Plan MCP Tools
//!
//! Tools for recommending diet plans and browsing the plan catalog.

use serde::Serialize;

use crate::dataset::PatientDataset;
use crate::models::{DietCode, DietRecommendation, Gender, PatientAttributes};
use crate::plans::{catalog, engine};

/// Message for the "no selection" placeholder (number 0)
pub const NO_PATIENT_SELECTED: &str = "No patient selected. Please select a patient.";
/// Message for a selection outside the dataset
pub const INVALID_SELECTION: &str = "Invalid selection. Please select a valid patient.";

/// A diet recommendation resolved for a selected patient
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub patient_name: String,
    pub code: DietCode,
    pub diet_name: String,
    pub description: String,
    pub meal_timings: String,
    pub recommended_foods: String,
    pub fasting_schedule: String,
}

/// Response when a patient selection cannot be resolved
#[derive(Debug, Serialize)]
pub struct SelectionRejected {
    pub error: String,
    pub selection: i64,
}

/// Recommend a diet plan for a patient selected by 1-based number.
///
/// Selection 0 is the "no selection" placeholder. It and out-of-range
/// selections are rejected with distinct messages, without running the
/// recommendation engine.
pub fn recommend_for_patient(
    dataset: &PatientDataset,
    selection: i64,
) -> Result<RecommendationResponse, SelectionRejected> {
    if selection == 0 {
        return Err(SelectionRejected {
            error: NO_PATIENT_SELECTED.to_string(),
            selection,
        });
    }

    let record = match usize::try_from(selection)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| dataset.get(index))
    {
        Some(record) => record,
        None => {
            return Err(SelectionRejected {
                error: INVALID_SELECTION.to_string(),
                selection,
            })
        }
    };

    let recommendation = engine::recommend(&record.attributes);
    Ok(RecommendationResponse {
        patient_name: record.name.clone(),
        code: recommendation.code,
        diet_name: recommendation.name,
        description: recommendation.description,
        meal_timings: recommendation.meal_timings,
        recommended_foods: recommendation.recommended_foods,
        fasting_schedule: recommendation.fasting_schedule,
    })
}

/// Recommend a diet plan directly from caller-supplied attributes.
///
/// The raw gender string is converted here, at the boundary; an
/// unrecognized value is rejected before the engine runs.
pub fn recommend_for_attributes(
    age: i32,
    gender: &str,
    bmi: f64,
    fasting_glucose: f64,
    fasting_insulin: f64,
) -> Result<DietRecommendation, String> {
    let gender = Gender::from_str(gender)
        .ok_or_else(|| format!("Unrecognized gender '{}' (expected Female or Male)", gender))?;

    let attrs = PatientAttributes {
        age,
        gender,
        bmi,
        fasting_glucose,
        fasting_insulin,
    };
    Ok(engine::recommend(&attrs))
}

/// Diet plan summary for listing
#[derive(Debug, Serialize)]
pub struct DietPlanSummary {
    pub code: DietCode,
    pub name: String,
}

/// Response for list_diet_plans
#[derive(Debug, Serialize)]
pub struct ListDietPlansResponse {
    pub plans: Vec<DietPlanSummary>,
    pub total: usize,
}

/// Full diet plan detail
#[derive(Debug, Serialize)]
pub struct DietPlanDetail {
    pub code: DietCode,
    pub name: String,
    pub description: String,
    pub meal_timings: String,
    pub recommended_foods: String,
    pub fasting_schedule: String,
}

/// List every plan in the catalog
pub fn list_diet_plans() -> ListDietPlansResponse {
    let plans: Vec<DietPlanSummary> = DietCode::ALL
        .iter()
        .map(|&code| DietPlanSummary {
            code,
            name: catalog::get(code).name.to_string(),
        })
        .collect();

    let total = plans.len();
    ListDietPlansResponse { plans, total }
}

/// Get full details for a plan by code string
pub fn get_diet_plan(code: &str) -> Option<DietPlanDetail> {
    let code = DietCode::from_str(code)?;
    let template = catalog::get(code);
    Some(DietPlanDetail {
        code,
        name: template.name.to_string(),
        description: template.description.to_string(),
        meal_timings: template.meal_timings.to_string(),
        recommended_foods: template.recommended_foods.to_string(),
        fasting_schedule: template.fasting_schedule.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixture() -> PatientDataset {
        let csv = "name,age,gender,weight,bmi,basal fasting glucose (mmol/l),basal fasting insulin (pmol/l),HOMA-IR diff\n\
                   Alice Baker,50,Female,82.5,28.0,6.0,80.0,-0.4\n\
                   Ben Carter,30,Male,95.0,32.1,5.0,50.0,0.2\n";
        PatientDataset::from_reader(Cursor::new(csv)).unwrap()
    }

    #[test]
    fn test_selection_zero_is_no_patient_selected() {
        let rejected = recommend_for_patient(&fixture(), 0).unwrap_err();
        assert_eq!(rejected.error, NO_PATIENT_SELECTED);
        assert_eq!(rejected.selection, 0);
    }

    #[test]
    fn test_out_of_range_selection_is_invalid() {
        let ds = fixture();
        assert_eq!(
            recommend_for_patient(&ds, 99).unwrap_err().error,
            INVALID_SELECTION
        );
        assert_eq!(
            recommend_for_patient(&ds, -1).unwrap_err().error,
            INVALID_SELECTION
        );
    }

    #[test]
    fn test_recommendation_carries_patient_name() {
        // High-risk older female resolves to CER
        let response = recommend_for_patient(&fixture(), 1).unwrap();
        assert_eq!(response.patient_name, "Alice Baker");
        assert_eq!(response.code, DietCode::Cer);
        assert_eq!(response.diet_name, "Continuous Energy Restriction (CER)");
        assert!(!response.fasting_schedule.is_empty());
    }

    #[test]
    fn test_recommendation_for_second_patient() {
        // BMI-driven male resolves to CER
        let response = recommend_for_patient(&fixture(), 2).unwrap();
        assert_eq!(response.patient_name, "Ben Carter");
        assert_eq!(response.code, DietCode::Cer);
    }

    #[test]
    fn test_recommend_for_attributes() {
        let recommendation = recommend_for_attributes(30, "male", 22.0, 5.0, 50.0).unwrap();
        assert_eq!(recommendation.code, DietCode::Dmf);
    }

    #[test]
    fn test_recommend_for_attributes_rejects_unknown_gender() {
        let err = recommend_for_attributes(30, "other", 22.0, 5.0, 50.0).unwrap_err();
        assert!(err.contains("Unrecognized gender 'other'"));
    }

    #[test]
    fn test_list_diet_plans_covers_catalog() {
        let response = list_diet_plans();
        assert_eq!(response.total, 4);
        let codes: Vec<DietCode> = response.plans.iter().map(|p| p.code).collect();
        assert_eq!(codes, DietCode::ALL.to_vec());
    }

    #[test]
    fn test_get_diet_plan_is_case_insensitive() {
        let plan = get_diet_plan("fesd").unwrap();
        assert_eq!(plan.code, DietCode::Fesd);
        assert_eq!(plan.name, "Fasting Every Second Day (FESD)");
    }

    #[test]
    fn test_get_diet_plan_unknown_code() {
        assert!(get_diet_plan("IF100").is_none());
    }
}
