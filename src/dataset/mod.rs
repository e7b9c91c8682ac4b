//! Patient dataset module
//!
//! Loads the tabular patient dataset and serves lookups.

pub mod source;

pub use source::{DatasetError, DatasetResult, PatientDataset, REQUIRED_COLUMNS};
