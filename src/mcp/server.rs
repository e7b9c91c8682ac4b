//! IFM MCP Server Implementation
//!
//! Implements the MCP server with all IFM tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::dataset::PatientDataset;
use crate::tools::patients;
use crate::tools::plans;
use crate::tools::status::StatusTracker;

/// IFM MCP Service
#[derive(Clone)]
pub struct IfmService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    dataset: PatientDataset,
    tool_router: ToolRouter<IfmService>,
}

impl IfmService {
    pub fn new(dataset_path: PathBuf, dataset: PatientDataset) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(dataset_path, dataset.len()))),
            dataset,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPatientParams {
    /// 1-based patient number from list_patients
    pub number: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecommendDietPlanParams {
    /// 1-based patient number from list_patients (0 means no selection)
    pub patient: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecommendFromAttributesParams {
    /// Age in years
    pub age: i32,
    /// Gender: Female or Male
    pub gender: String,
    /// Body mass index
    pub bmi: f64,
    /// Basal fasting glucose in mmol/L
    pub fasting_glucose: f64,
    /// Basal fasting insulin in pmol/L
    pub fasting_insulin: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDietPlanParams {
    /// Plan code: CER, IER, DMF, or FESD
    pub code: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl IfmService {
    // --- Status ---

    #[tool(description = "Get the current status of the IFM service including build info, dataset status, and process information")]
    async fn ifm_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for recommending diet plans. Call this when starting a recommendation session or when unsure how to use the IFM tools.")]
    fn fasting_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::FASTING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(FASTING_INSTRUCTIONS)]))
    }

    // --- Patients ---

    #[tool(description = "List all patients in the dataset with their 1-based number, name, age, and gender")]
    fn list_patients(&self) -> Result<CallToolResult, McpError> {
        let result = patients::list_patients(&self.dataset);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full clinical details for a patient by number")]
    fn get_patient(&self, Parameters(p): Parameters<GetPatientParams>) -> Result<CallToolResult, McpError> {
        let result = patients::get_patient(&self.dataset, p.number);
        let json = match result {
            Some(patient) => serde_json::to_string_pretty(&patient),
            None => Ok(format!(r#"{{"error": "Patient not found", "number": {}}}"#, p.number)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Diet Plans ---

    #[tool(description = "Recommend an intermittent fasting diet plan for a patient selected by 1-based number. Returns the patient's name with the resolved plan fields. Number 0 (no selection) and out-of-range numbers are rejected with a message.")]
    fn recommend_diet_plan(&self, Parameters(p): Parameters<RecommendDietPlanParams>) -> Result<CallToolResult, McpError> {
        let result = plans::recommend_for_patient(&self.dataset, p.patient);
        let json = match result {
            Ok(recommendation) => serde_json::to_string_pretty(&recommendation),
            Err(rejected) => serde_json::to_string_pretty(&rejected),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Recommend an intermittent fasting diet plan directly from clinical attributes. Gender must be Female or Male; glucose is mmol/L, insulin is pmol/L.")]
    fn recommend_from_attributes(&self, Parameters(p): Parameters<RecommendFromAttributesParams>) -> Result<CallToolResult, McpError> {
        let result = plans::recommend_for_attributes(p.age, &p.gender, p.bmi, p.fasting_glucose, p.fasting_insulin)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the four diet plans in the catalog")]
    fn list_diet_plans(&self) -> Result<CallToolResult, McpError> {
        let result = plans::list_diet_plans();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full details for a diet plan by code (CER, IER, DMF, or FESD)")]
    fn get_diet_plan(&self, Parameters(p): Parameters<GetDietPlanParams>) -> Result<CallToolResult, McpError> {
        let result = plans::get_diet_plan(&p.code);
        let json = match result {
            Some(plan) => serde_json::to_string_pretty(&plan),
            None => Ok(format!(r#"{{"error": "Unknown diet plan code", "code": "{}"}}"#, p.code)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for IfmService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ifm".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Intermittent Fasting Manager".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Intermittent Fasting Manager (IFM) - recommends one of four intermittent fasting \
                 diet plans (CER, IER, DMF, FESD) for patients in the loaded dataset. \
                 IMPORTANT: Call fasting_instructions for the recommendation workflow. \
                 Patients: list_patients, get_patient. \
                 Recommendations: recommend_diet_plan (by patient number), recommend_from_attributes. \
                 Catalog: list_diet_plans, get_diet_plan. \
                 Status: ifm_status."
                    .into(),
            ),
        }
    }
}
