use serde::Serialize;

use crate::error::Result;
use crate::github::types::WorkflowJob;
use crate::report::RunReport;
use crate::workflow::LogicalEdge;

/// Schema revision of the export payload.
///
/// Consumers treat this as a compatibility discriminant; within a version
/// the field set only ever grows.
pub const EXPORT_VERSION: u32 = 1;

/// Versioned snapshot of a run for external viewers.
#[derive(Debug, Serialize)]
pub struct ExportPayload {
    pub version: u32,
    pub repo: String,
    pub run: RunMeta,
    /// Jobs in fetched order, step order preserved
    pub jobs: Vec<WorkflowJob>,
    /// Declared edges exactly as authored; consumers may re-resolve them
    /// against `jobs` with their own matching rules
    pub edges: Vec<LogicalEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_path: Option<String>,
}

/// Run metadata subset carried in the payload.
#[derive(Debug, Serialize)]
pub struct RunMeta {
    pub id: u64,
    pub name: Option<String>,
    pub status: String,
    pub conclusion: Option<String>,
    pub created_at: Option<String>,
    pub run_started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Assemble the export payload from a finished report.
///
/// Inputs are copied, not consumed: the report stays usable for rendering.
pub fn build_payload(report: &RunReport) -> ExportPayload {
    ExportPayload {
        version: EXPORT_VERSION,
        repo: report.repo.clone(),
        run: RunMeta {
            id: report.run.id,
            name: report.run.name.clone(),
            status: report.run.status.clone(),
            conclusion: report.run.conclusion.clone(),
            created_at: report.run.created_at.clone(),
            run_started_at: report.run.run_started_at.clone(),
            sha: report.run.head_sha.clone(),
        },
        jobs: report.jobs.clone(),
        edges: report.edges.clone(),
        workflow_path: report.workflow_path.clone(),
    }
}

/// Serialize the payload, optionally pretty-printed.
pub fn to_json(payload: &ExportPayload, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(json)
}
