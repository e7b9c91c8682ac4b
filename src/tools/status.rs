//! IFM Status Tool
//!
//! Provides runtime status information about the IFM service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Diet plan recommendation instructions for AI assistants
pub const FASTING_INSTRUCTIONS: &str = r#"
# IFM Diet Plan Recommendation Instructions

This guide explains how to recommend intermittent fasting diet plans using the
Intermittent Fasting Manager (IFM) tools.

## Overview

IFM serves a read-only patient dataset loaded at startup. Each patient carries the
clinical attributes that drive plan selection: age, gender, BMI, basal fasting
glucose (mmol/L), and basal fasting insulin (pmol/L).

## Recommendation Workflow

1. Call `list_patients` to show the available patients with their 1-based numbers.
2. Ask the user to pick a patient number.
3. Call `recommend_diet_plan` with that number.
4. Present the result as a table: Patient Name, Diet Name, Description,
   Meal Timings, Recommended Foods, Fasting Schedule.

Do NOT call `recommend_diet_plan` until the user has picked a patient. Number 0 is
the "no selection" placeholder and is always rejected with a message; out-of-range
numbers are rejected with a different message. Relay these messages to the user
instead of retrying.

## The Four Plans

| Code | Plan |
|------|------|
| CER  | Continuous Energy Restriction - daily 25% calorie reduction |
| IER  | Intermittent Energy Restriction - 5:2 pattern |
| DMF  | Daily Morning Fasting - 16-hour daily fast |
| FESD | Fasting Every Second Day - alternate 20-hour fasts |

Use `list_diet_plans` and `get_diet_plan` to show plan details without running a
recommendation.

## How Selection Works

Plans are assigned by a fixed clinical rule ladder, not by a model:

- Glucose above 5.6 mmol/L or insulin above 100 pmol/L puts the patient in the
  high metabolic risk tier; age (above 45) and gender pick the plan within it.
- Otherwise BMI above 30 picks the moderate tier.
- Otherwise the patient gets the default mild tier.

All cutoffs are strict: a patient at exactly 5.6 mmol/L is NOT high risk.

## Ad-hoc Recommendations

`recommend_from_attributes` runs the same rules on attributes you supply directly,
without selecting a dataset patient. Gender must be "Female" or "Male"
(case-insensitive); any other value is rejected.

## Notes

- The dataset is immutable while the server runs; no tool modifies it.
- Recommendations are deterministic: identical attributes always produce the
  same plan.
- Nothing is persisted; every recommendation is computed on request.
"#;

/// Runtime status of the IFM service
#[derive(Debug, Clone, Serialize)]
pub struct IfmStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Dataset information
    pub dataset_path: String,
    pub dataset_size_bytes: Option<u64>,
    pub patient_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// When this status was collected
    pub as_of: String,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    dataset_path: PathBuf,
    patient_count: usize,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(dataset_path: PathBuf, patient_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            dataset_path,
            patient_count,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> IfmStatus {
        let build_info = BuildInfo::current();

        // Get dataset size if it exists
        let dataset_size_bytes = std::fs::metadata(&self.dataset_path)
            .ok()
            .map(|m| m.len());

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        IfmStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            dataset_path: self.dataset_path.display().to_string(),
            dataset_size_bytes,
            patient_count: self.patient_count,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            as_of: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}
