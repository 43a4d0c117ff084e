use serde::{Deserialize, Serialize};

/// A GitHub Actions workflow run.
///
/// Timestamps are kept as the raw API strings; a field that is missing or
/// unparseable degrades to an unknown duration downstream instead of
/// failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Unique identifier for the workflow run
    pub id: u64,
    /// Name of the workflow
    pub name: Option<String>,
    /// SHA of the head commit
    pub head_sha: Option<String>,
    /// Repository-relative path to the workflow file
    pub path: Option<String>,
    /// Status of the run
    pub status: String,
    /// Conclusion of the run (success, failure, etc.)
    pub conclusion: Option<String>,
    /// When the run was created
    pub created_at: Option<String>,
    /// When the first attempt started
    pub run_started_at: Option<String>,
}

/// Job within a workflow run.
///
/// Matrix expansion yields several jobs sharing one definition, named like
/// `"build (linux)"` and `"build (windows)"`; `id` is the only unique key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    /// Unique identifier for the job
    pub id: u64,
    /// Name of the job
    pub name: String,
    /// Status of the job
    pub status: String,
    /// Conclusion of the job
    pub conclusion: Option<String>,
    /// When the job started
    pub started_at: Option<String>,
    /// When the job completed
    pub completed_at: Option<String>,
    /// Steps in this job, in execution order
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

/// Step within a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Name of the step
    pub name: String,
    /// Status of the step
    pub status: String,
    /// Conclusion of the step
    pub conclusion: Option<String>,
    /// When the step started
    pub started_at: Option<String>,
    /// When the step completed
    pub completed_at: Option<String>,
    /// Step number
    pub number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_deserializes_without_steps() {
        let job: WorkflowJob = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "build",
                "status": "completed",
                "conclusion": "success",
                "started_at": "2024-05-01T10:00:00Z",
                "completed_at": "2024-05-01T10:01:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(job.id, 7);
        assert!(job.steps.is_empty());
    }

    #[test]
    fn test_run_tolerates_null_timestamps() {
        let run: WorkflowRun = serde_json::from_str(
            r#"{
                "id": 99,
                "name": "CI",
                "head_sha": "abc123",
                "path": ".github/workflows/ci.yml",
                "status": "in_progress",
                "conclusion": null,
                "created_at": "2024-05-01T09:59:00Z",
                "run_started_at": null
            }"#,
        )
        .unwrap();

        assert_eq!(run.status, "in_progress");
        assert!(run.conclusion.is_none());
        assert!(run.run_started_at.is_none());
    }
}
