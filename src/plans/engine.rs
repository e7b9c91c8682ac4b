//! Diet plan recommendation engine
//!
//! Maps a patient's clinical attributes to a diet plan.

use crate::models::{DietCode, DietRecommendation, Gender, PatientAttributes};

use super::catalog;

/// Fasting glucose cutoff (mmol/L) for the high metabolic risk tier
pub const GLUCOSE_CUTOFF_MMOL_L: f64 = 5.6;
/// Fasting insulin cutoff (pmol/L) for the high metabolic risk tier
pub const INSULIN_CUTOFF_PMOL_L: f64 = 100.0;
/// BMI cutoff for the moderate tier
pub const BMI_CUTOFF: f64 = 30.0;
/// Age cutoff separating milder plans within the high risk tier
pub const AGE_CUTOFF_YEARS: i32 = 45;

/// Select a plan code from clinical attributes.
///
/// Elevated glucose or insulin outranks BMI, which outranks the default
/// assignment; age and gender pick the plan within each tier. All cutoff
/// comparisons are strict: a value exactly at a cutoff falls through to the
/// lower tier.
fn select_code(attrs: &PatientAttributes) -> DietCode {
    let high_risk = attrs.fasting_glucose > GLUCOSE_CUTOFF_MMOL_L
        || attrs.fasting_insulin > INSULIN_CUTOFF_PMOL_L;

    if high_risk {
        if attrs.age > AGE_CUTOFF_YEARS {
            // Milder plan for older high-risk patients
            match attrs.gender {
                Gender::Female => DietCode::Cer,
                Gender::Male => DietCode::Fesd,
            }
        } else {
            match attrs.gender {
                Gender::Female => DietCode::Ier,
                Gender::Male => DietCode::Fesd,
            }
        }
    } else if attrs.bmi > BMI_CUTOFF {
        match attrs.gender {
            Gender::Female => DietCode::Dmf,
            Gender::Male => DietCode::Cer,
        }
    } else {
        match attrs.gender {
            Gender::Female => DietCode::Cer,
            Gender::Male => DietCode::Dmf,
        }
    }
}

/// Recommend a diet plan for the given attributes
///
/// Pure and deterministic: identical attributes always resolve to the same
/// recommendation.
pub fn recommend(attrs: &PatientAttributes) -> DietRecommendation {
    tracing::debug!(
        age = attrs.age,
        gender = attrs.gender.as_str(),
        bmi = attrs.bmi,
        fasting_glucose = attrs.fasting_glucose,
        fasting_insulin = attrs.fasting_insulin,
        "selecting diet plan"
    );

    let code = select_code(attrs);
    let template = catalog::get(code);

    DietRecommendation {
        code,
        name: template.name.to_string(),
        description: template.description.to_string(),
        meal_timings: template.meal_timings.to_string(),
        recommended_foods: template.recommended_foods.to_string(),
        fasting_schedule: template.fasting_schedule.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(age: i32, gender: Gender, glucose: f64, insulin: f64, bmi: f64) -> PatientAttributes {
        PatientAttributes {
            age,
            gender,
            bmi,
            fasting_glucose: glucose,
            fasting_insulin: insulin,
        }
    }

    #[test]
    fn test_high_risk_older_female_gets_cer() {
        let code = select_code(&attrs(50, Gender::Female, 6.0, 80.0, 28.0));
        assert_eq!(code, DietCode::Cer);
    }

    #[test]
    fn test_high_risk_younger_male_gets_fesd() {
        let code = select_code(&attrs(30, Gender::Male, 6.0, 80.0, 28.0));
        assert_eq!(code, DietCode::Fesd);
    }

    #[test]
    fn test_high_risk_older_male_gets_fesd() {
        let code = select_code(&attrs(50, Gender::Male, 6.0, 80.0, 28.0));
        assert_eq!(code, DietCode::Fesd);
    }

    #[test]
    fn test_high_risk_younger_female_gets_ier() {
        let code = select_code(&attrs(30, Gender::Female, 6.0, 80.0, 28.0));
        assert_eq!(code, DietCode::Ier);
    }

    #[test]
    fn test_bmi_driven_female_gets_dmf() {
        let code = select_code(&attrs(40, Gender::Female, 5.0, 50.0, 32.0));
        assert_eq!(code, DietCode::Dmf);
    }

    #[test]
    fn test_bmi_driven_male_gets_cer() {
        let code = select_code(&attrs(40, Gender::Male, 5.0, 50.0, 32.0));
        assert_eq!(code, DietCode::Cer);
    }

    #[test]
    fn test_default_female_gets_cer() {
        let code = select_code(&attrs(25, Gender::Female, 5.0, 50.0, 22.0));
        assert_eq!(code, DietCode::Cer);
    }

    #[test]
    fn test_default_male_gets_dmf() {
        let code = select_code(&attrs(25, Gender::Male, 5.0, 50.0, 22.0));
        assert_eq!(code, DietCode::Dmf);
    }

    #[test]
    fn test_glucose_cutoff_is_strict() {
        // Exactly 5.6 stays out of the high risk tier
        let at_cutoff = select_code(&attrs(50, Gender::Female, 5.6, 50.0, 22.0));
        assert_eq!(at_cutoff, DietCode::Cer);

        let above_cutoff = select_code(&attrs(50, Gender::Male, 5.61, 50.0, 22.0));
        assert_eq!(above_cutoff, DietCode::Fesd);
    }

    #[test]
    fn test_insulin_cutoff_is_strict() {
        // Exactly 100 stays out of the high risk tier
        let at_cutoff = select_code(&attrs(30, Gender::Male, 5.0, 100.0, 22.0));
        assert_eq!(at_cutoff, DietCode::Dmf);

        let above_cutoff = select_code(&attrs(30, Gender::Male, 5.0, 100.5, 22.0));
        assert_eq!(above_cutoff, DietCode::Fesd);
    }

    #[test]
    fn test_bmi_cutoff_is_strict() {
        // Exactly 30 falls to the default tier
        let at_cutoff = select_code(&attrs(40, Gender::Female, 5.0, 50.0, 30.0));
        assert_eq!(at_cutoff, DietCode::Cer);

        let above_cutoff = select_code(&attrs(40, Gender::Female, 5.0, 50.0, 30.1));
        assert_eq!(above_cutoff, DietCode::Dmf);
    }

    #[test]
    fn test_age_cutoff_is_strict() {
        // Exactly 45 counts as younger within the high risk tier
        let at_cutoff = select_code(&attrs(45, Gender::Female, 6.0, 80.0, 28.0));
        assert_eq!(at_cutoff, DietCode::Ier);

        let above_cutoff = select_code(&attrs(46, Gender::Female, 6.0, 80.0, 28.0));
        assert_eq!(above_cutoff, DietCode::Cer);
    }

    #[test]
    fn test_either_marker_triggers_high_risk() {
        // Insulin alone is enough even with normal glucose
        let code = select_code(&attrs(30, Gender::Female, 5.0, 150.0, 22.0));
        assert_eq!(code, DietCode::Ier);
    }

    #[test]
    fn test_recommend_resolves_template() {
        let recommendation = recommend(&attrs(50, Gender::Female, 6.0, 80.0, 28.0));
        assert_eq!(recommendation.code, DietCode::Cer);
        assert_eq!(recommendation.name, "Continuous Energy Restriction (CER)");
        assert!(!recommendation.description.is_empty());
        assert!(!recommendation.meal_timings.is_empty());
        assert!(!recommendation.recommended_foods.is_empty());
        assert!(!recommendation.fasting_schedule.is_empty());
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let input = attrs(40, Gender::Male, 5.0, 50.0, 32.0);
        assert_eq!(recommend(&input), recommend(&input));
    }
}
