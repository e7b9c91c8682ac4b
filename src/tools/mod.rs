//! IFM Tools module
//!
//! MCP tool implementations for the Intermittent Fasting Manager.

pub mod patients;
pub mod plans;
pub mod status;
