//! Patient dataset loading
//!
//! Reads the patient CSV into an immutable in-memory dataset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Gender, PatientAttributes, PatientRecord};

const COL_NAME: &str = "name";
const COL_AGE: &str = "age";
const COL_GENDER: &str = "gender";
const COL_WEIGHT: &str = "weight";
const COL_BMI: &str = "bmi";
const COL_GLUCOSE: &str = "basal fasting glucose (mmol/l)";
const COL_INSULIN: &str = "basal fasting insulin (pmol/l)";
const COL_HOMA_IR_DIFF: &str = "HOMA-IR diff";

/// Columns that must be present in the dataset header
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_NAME,
    COL_AGE,
    COL_GENDER,
    COL_WEIGHT,
    COL_BMI,
    COL_GLUCOSE,
    COL_INSULIN,
    COL_HOMA_IR_DIFF,
];

/// Dataset error types
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset has no header row")]
    MissingHeader,

    #[error("Missing columns in the data: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Row {row}: missing value for column '{column}'")]
    MissingField { row: usize, column: String },

    #[error("Row {row}: invalid value '{value}' for column '{column}'")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: unrecognized gender '{value}' (expected Female or Male)")]
    UnknownGender { row: usize, value: String },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Positions of the required columns within the header
struct ColumnIndex {
    name: usize,
    age: usize,
    gender: usize,
    weight: usize,
    bmi: usize,
    glucose: usize,
    insulin: usize,
    homa_ir_diff: usize,
}

impl ColumnIndex {
    /// Locate every required column, reporting all missing ones at once
    fn from_header(header: &str) -> DatasetResult<Self> {
        let columns: Vec<&str> = header.split(',').map(|c| c.trim()).collect();
        let find = |name: &str| columns.iter().position(|c| *c == name);

        if let (
            Some(name),
            Some(age),
            Some(gender),
            Some(weight),
            Some(bmi),
            Some(glucose),
            Some(insulin),
            Some(homa_ir_diff),
        ) = (
            find(COL_NAME),
            find(COL_AGE),
            find(COL_GENDER),
            find(COL_WEIGHT),
            find(COL_BMI),
            find(COL_GLUCOSE),
            find(COL_INSULIN),
            find(COL_HOMA_IR_DIFF),
        ) {
            Ok(Self {
                name,
                age,
                gender,
                weight,
                bmi,
                glucose,
                insulin,
                homa_ir_diff,
            })
        } else {
            let missing = REQUIRED_COLUMNS
                .iter()
                .filter(|c| find(c).is_none())
                .map(|c| c.to_string())
                .collect();
            Err(DatasetError::MissingColumns(missing))
        }
    }

    /// Parse one data row into a patient record
    ///
    /// Values are taken as-is: only missing/non-numeric fields and
    /// unrecognized genders are rejected, never implausible values.
    fn parse_row(&self, row: usize, line: &str) -> DatasetResult<PatientRecord> {
        let fields: Vec<&str> = line.split(',').collect();

        let name = field(&fields, row, self.name, COL_NAME)?.to_string();
        let age: i32 = parse_field(&fields, row, self.age, COL_AGE)?;

        let gender_raw = field(&fields, row, self.gender, COL_GENDER)?;
        let gender = Gender::from_str(gender_raw).ok_or_else(|| DatasetError::UnknownGender {
            row,
            value: gender_raw.to_string(),
        })?;

        let weight: f64 = parse_field(&fields, row, self.weight, COL_WEIGHT)?;
        let bmi: f64 = parse_field(&fields, row, self.bmi, COL_BMI)?;
        let fasting_glucose: f64 = parse_field(&fields, row, self.glucose, COL_GLUCOSE)?;
        let fasting_insulin: f64 = parse_field(&fields, row, self.insulin, COL_INSULIN)?;
        let homa_ir_diff: f64 = parse_field(&fields, row, self.homa_ir_diff, COL_HOMA_IR_DIFF)?;

        Ok(PatientRecord {
            name,
            weight,
            homa_ir_diff,
            attributes: PatientAttributes {
                age,
                gender,
                bmi,
                fasting_glucose,
                fasting_insulin,
            },
        })
    }
}

/// Get a trimmed field by column position, rejecting missing or empty values
fn field<'a>(fields: &[&'a str], row: usize, index: usize, column: &str) -> DatasetResult<&'a str> {
    let value = fields.get(index).map(|f| f.trim()).unwrap_or("");
    if value.is_empty() {
        return Err(DatasetError::MissingField {
            row,
            column: column.to_string(),
        });
    }
    Ok(value)
}

/// Parse a field as a number, rejecting non-numeric values
fn parse_field<T: std::str::FromStr>(
    fields: &[&str],
    row: usize,
    index: usize,
    column: &str,
) -> DatasetResult<T> {
    let value = field(fields, row, index, column)?;
    value.parse().map_err(|_| DatasetError::InvalidField {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Immutable patient dataset, loaded once at startup
///
/// Cheap to clone; all clones share the same records. No mutation after
/// load, so concurrent reads need no locking.
#[derive(Clone, Debug)]
pub struct PatientDataset {
    records: Arc<Vec<PatientRecord>>,
}

impl PatientDataset {
    /// Load a dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a dataset from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> DatasetResult<Self> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(DatasetError::MissingHeader),
        };
        let columns = ColumnIndex::from_header(&header)?;

        let mut records = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line = line_result?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            // Rows are numbered from 1, not counting the header
            records.push(columns.parse_row(line_num + 1, &line)?);
        }

        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Look up a patient by zero-based index
    pub fn get(&self, index: usize) -> Option<&PatientRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "name,age,gender,weight,bmi,basal fasting glucose (mmol/l),basal fasting insulin (pmol/l),HOMA-IR diff";

    fn dataset(rows: &[&str]) -> DatasetResult<PatientDataset> {
        let csv = format!("{}\n{}\n", HEADER, rows.join("\n"));
        PatientDataset::from_reader(Cursor::new(csv))
    }

    #[test]
    fn test_load_valid_dataset() {
        let ds = dataset(&[
            "Alice Baker,50,Female,82.5,28.0,6.0,80.0,-0.4",
            "Ben Carter,30,Male,95.0,32.1,5.0,50.0,0.2",
        ])
        .unwrap();

        assert_eq!(ds.len(), 2);

        let alice = ds.get(0).unwrap();
        assert_eq!(alice.name, "Alice Baker");
        assert_eq!(alice.attributes.age, 50);
        assert_eq!(alice.attributes.gender, Gender::Female);
        assert_eq!(alice.attributes.fasting_glucose, 6.0);
        assert_eq!(alice.attributes.fasting_insulin, 80.0);
        assert_eq!(alice.weight, 82.5);
        assert_eq!(alice.homa_ir_diff, -0.4);

        let ben = ds.get(1).unwrap();
        assert_eq!(ben.attributes.gender, Gender::Male);
        assert_eq!(ben.attributes.bmi, 32.1);

        assert!(ds.get(2).is_none());
    }

    #[test]
    fn test_columns_may_appear_in_any_order_with_extras() {
        let csv = "id,gender,name,age,bmi,weight,HOMA-IR diff,basal fasting glucose (mmol/l),basal fasting insulin (pmol/l),CER\n\
                   7,Female,Alice Baker,50,28.0,82.5,-0.4,6.0,80.0,1\n";
        let ds = PatientDataset::from_reader(Cursor::new(csv)).unwrap();
        let alice = ds.get(0).unwrap();
        assert_eq!(alice.name, "Alice Baker");
        assert_eq!(alice.attributes.bmi, 28.0);
    }

    #[test]
    fn test_missing_columns_are_all_reported() {
        let csv = "name,age,weight,basal fasting glucose (mmol/l),basal fasting insulin (pmol/l),HOMA-IR diff\n";
        let err = PatientDataset::from_reader(Cursor::new(csv)).unwrap_err();
        match err {
            DatasetError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["gender".to_string(), "bmi".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_missing_header() {
        let err = PatientDataset::from_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, DatasetError::MissingHeader));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let err = dataset(&["Alice Baker,50,Female,82.5,high,6.0,80.0,-0.4"]).unwrap_err();
        match err {
            DatasetError::InvalidField { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "bmi");
                assert_eq!(value, "high");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let err = dataset(&["Alice Baker,50,F,82.5,28.0,6.0,80.0,-0.4"]).unwrap_err();
        match err {
            DatasetError::UnknownGender { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "F");
            }
            other => panic!("expected UnknownGender, got {:?}", other),
        }
    }

    #[test]
    fn test_gender_is_case_insensitive() {
        let ds = dataset(&["Alice Baker,50,FEMALE,82.5,28.0,6.0,80.0,-0.4"]).unwrap();
        assert_eq!(ds.get(0).unwrap().attributes.gender, Gender::Female);
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let err = dataset(&["Alice Baker,50,Female,82.5"]).unwrap_err();
        assert!(matches!(err, DatasetError::MissingField { row: 1, .. }));
    }

    #[test]
    fn test_implausible_values_still_load() {
        // Plausibility is not validated, only parseability
        let ds = dataset(&["Glitch Row,-3,Male,0.0,900.0,-1.0,-5.0,0.0"]).unwrap();
        let record = ds.get(0).unwrap();
        assert_eq!(record.attributes.age, -3);
        assert_eq!(record.attributes.bmi, 900.0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = format!(
            "{}\n\nAlice Baker,50,Female,82.5,28.0,6.0,80.0,-0.4\n\n",
            HEADER
        );
        let ds = PatientDataset::from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(ds.len(), 1);
    }
}
