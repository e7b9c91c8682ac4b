//! Diet plan catalog
//!
//! The four fixed intermittent fasting plan templates, keyed by plan code.

use crate::models::{DietCode, DietPlanTemplate};

/// Continuous Energy Restriction
const CER: DietPlanTemplate = DietPlanTemplate {
    name: "Continuous Energy Restriction (CER)",
    description: "Daily 25% calorie reduction with balanced meals.",
    meal_timings: "Breakfast: 8:00 AM, Lunch: 1:00 PM, Dinner: 6:00 PM",
    recommended_foods: "Vegetables (spinach, broccoli), Fruits (berries, apples), Lean protein (chicken), Whole grains (quinoa)",
    fasting_schedule: "No fasting periods, consistent intake daily.",
};

/// Intermittent Energy Restriction (5:2)
const IER: DietPlanTemplate = DietPlanTemplate {
    name: "Intermittent Energy Restriction (5:2 Diet)",
    description: "Two days of very low calories (500-600 kcal), five days normal eating.",
    meal_timings: "Fasting Days: One meal at 12:00 PM; Normal Days: Breakfast 8:00 AM, Lunch 1:00 PM, Dinner 6:00 PM",
    recommended_foods: "Fasting Days: Vegetables (kale, carrots), Fruits (orange); Normal Days: Add lean protein (fish), nuts",
    fasting_schedule: "Two consecutive days (e.g., Mon, Tue) with 500-600 kcal.",
};

/// Daily Morning Fasting
const DMF: DietPlanTemplate = DietPlanTemplate {
    name: "Daily Morning Fasting (DMF)",
    description: "Skip breakfast, eat within a 6-8 hour window later in the day.",
    meal_timings: "First Meal: 12:00 PM, Last Meal: 8:00 PM",
    recommended_foods: "Vegetables (zucchini, peppers), Fruits (banana, grapefruit), Protein (eggs), Healthy fats (avocado)",
    fasting_schedule: "Fast from 8:00 PM to 12:00 PM daily (16-hour fast).",
};

/// Fasting Every Second Day
const FESD: DietPlanTemplate = DietPlanTemplate {
    name: "Fasting Every Second Day (FESD)",
    description: "Alternate fasting (20 hours) and normal eating days.",
    meal_timings: "Fasting Day: One meal at 6:00 PM; Normal Day: Breakfast 8:00 AM, Lunch 1:00 PM, Dinner 6:00 PM",
    recommended_foods: "Fasting Day: Vegetables (cucumber, leafy greens); Normal Day: Fruits (peach), Protein (turkey)",
    fasting_schedule: "Fast 20 hours every other day (e.g., 10:00 PM to 6:00 PM next day).",
};

/// Resolve a plan code to its template
///
/// Total over the closed `DietCode` enum; adding a code without a template
/// arm is a compile error, so every code always resolves.
pub fn get(code: DietCode) -> &'static DietPlanTemplate {
    match code {
        DietCode::Cer => &CER,
        DietCode::Ier => &IER,
        DietCode::Dmf => &DMF,
        DietCode::Fesd => &FESD,
    }
}
