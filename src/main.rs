//! Intermittent Fasting Manager (IFM)
//!
//! An MCP server for intermittent fasting diet plan recommendations.

use std::path::PathBuf;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod dataset;
mod mcp;
mod models;
mod plans;
mod tools;

use mcp::IfmService;

/// Get the patient dataset path from environment or use default
fn get_dataset_path() -> PathBuf {
    std::env::var("IFM_DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("patients.csv");
            path
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ifm=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Get dataset path
    let dataset_path = get_dataset_path();
    eprintln!("Dataset path: {}", dataset_path.display());

    // Load the patient dataset; schema or parse failures are fatal
    eprintln!("Loading patient dataset...");
    let dataset = dataset::PatientDataset::load(&dataset_path)?;
    eprintln!("Loaded {} patients", dataset.len());

    // Create the IFM service
    let service = IfmService::new(dataset_path, dataset);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
