//! Patient MCP Tools
//!
//! Tools for browsing the loaded patient dataset.

use serde::Serialize;

use crate::dataset::PatientDataset;
use crate::models::PatientRecord;

/// Patient summary for listing
#[derive(Debug, Serialize)]
pub struct PatientSummary {
    /// 1-based patient number, used to select a patient
    pub number: usize,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Response for list_patients
#[derive(Debug, Serialize)]
pub struct ListPatientsResponse {
    pub patients: Vec<PatientSummary>,
    pub total: usize,
}

/// Full patient detail
#[derive(Debug, Serialize)]
pub struct PatientDetail {
    pub number: usize,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub weight: f64,
    pub bmi: f64,
    pub fasting_glucose_mmol_l: f64,
    pub fasting_insulin_pmol_l: f64,
    pub homa_ir_diff: f64,
}

impl PatientDetail {
    fn new(number: usize, record: &PatientRecord) -> Self {
        Self {
            number,
            name: record.name.clone(),
            age: record.attributes.age,
            gender: record.attributes.gender.as_str().to_string(),
            weight: record.weight,
            bmi: record.attributes.bmi,
            fasting_glucose_mmol_l: record.attributes.fasting_glucose,
            fasting_insulin_pmol_l: record.attributes.fasting_insulin,
            homa_ir_diff: record.homa_ir_diff,
        }
    }
}

/// List all patients in dataset order
pub fn list_patients(dataset: &PatientDataset) -> ListPatientsResponse {
    let patients: Vec<PatientSummary> = dataset
        .iter()
        .enumerate()
        .map(|(i, record)| PatientSummary {
            number: i + 1,
            name: record.name.clone(),
            age: record.attributes.age,
            gender: record.attributes.gender.as_str().to_string(),
        })
        .collect();

    let total = patients.len();
    ListPatientsResponse { patients, total }
}

/// Get full details for a patient by 1-based number
pub fn get_patient(dataset: &PatientDataset, number: i64) -> Option<PatientDetail> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    dataset
        .get(index)
        .map(|record| PatientDetail::new(index + 1, record))
}
