//! Intermittent Fasting Manager (IFM) Library
//!
//! Core functionality for intermittent fasting diet plan recommendations.

pub mod build_info;
pub mod dataset;
pub mod mcp;
pub mod models;
pub mod plans;
pub mod tools;
