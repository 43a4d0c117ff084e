use crate::github::types::WorkflowJob;

/// Outcome of matching a declared job identifier against the runtime jobs.
///
/// Runtime job names drift from authored identifiers under matrix expansion
/// or custom naming; the tag records which rule found the match.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    /// Job name equals the identifier verbatim.
    Exact(&'a WorkflowJob),
    /// Job name starts with the identifier (minor formatting drift).
    Prefix(&'a WorkflowJob),
    /// Job name starts with `"{id} ("`, the matrix-expanded form.
    Bracketed(&'a WorkflowJob),
    /// No rule fired; never fabricates a node.
    Unresolved,
}

impl<'a> Resolution<'a> {
    /// The matched job, whichever rule found it.
    pub fn node(self) -> Option<&'a WorkflowJob> {
        match self {
            Resolution::Exact(job) | Resolution::Prefix(job) | Resolution::Bracketed(job) => {
                Some(job)
            }
            Resolution::Unresolved => None,
        }
    }
}

/// Map a declared job identifier to a runtime job.
///
/// Rules are tried in order, each scanning `jobs` in input order (the
/// platform's creation order), first match wins: exact name, then plain
/// prefix, then the matrix form. The prefix rule leaves matrix-shaped
/// names to the bracketed rule, keeping the tags disjoint. A pathological
/// name collision can still pick the wrong sibling.
pub fn resolve<'a>(logical_id: &str, jobs: &'a [WorkflowJob]) -> Resolution<'a> {
    if let Some(job) = jobs.iter().find(|job| job.name == logical_id) {
        return Resolution::Exact(job);
    }

    let bracketed = format!("{logical_id} (");
    if let Some(job) = jobs
        .iter()
        .find(|job| job.name.starts_with(logical_id) && !job.name.starts_with(&bracketed))
    {
        return Resolution::Prefix(job);
    }
    if let Some(job) = jobs.iter().find(|job| job.name.starts_with(&bracketed)) {
        return Resolution::Bracketed(job);
    }

    Resolution::Unresolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, name: &str) -> WorkflowJob {
        WorkflowJob {
            id,
            name: name.to_owned(),
            status: "completed".to_owned(),
            conclusion: Some("success".to_owned()),
            started_at: None,
            completed_at: None,
            steps: vec![],
        }
    }

    #[test]
    fn test_exact_match_beats_weaker_rules() {
        // A prefix candidate appears first; the later exact match must win.
        let jobs = vec![job(1, "build (linux)"), job(2, "build-docs"), job(3, "build")];

        let resolution = resolve("build", &jobs);
        assert!(matches!(resolution, Resolution::Exact(found) if found.id == 3));
    }

    #[test]
    fn test_prefix_match_handles_formatting_drift() {
        let jobs = vec![job(1, "lint and format"), job(2, "test")];

        let resolution = resolve("lint", &jobs);
        assert!(matches!(resolution, Resolution::Prefix(found) if found.id == 1));
    }

    #[test]
    fn test_bracketed_match_handles_matrix_expansion() {
        let jobs = vec![job(1, "deploy (prod)")];

        let resolution = resolve("deploy", &jobs);
        assert!(matches!(resolution, Resolution::Bracketed(found) if found.id == 1));
    }

    #[test]
    fn test_first_matrix_sibling_wins_in_input_order() {
        let jobs = vec![job(1, "build (linux)"), job(2, "build (windows)")];

        let resolution = resolve("build", &jobs);
        assert!(matches!(resolution, Resolution::Bracketed(found) if found.id == 1));
    }

    #[test]
    fn test_plain_prefix_beats_bracketed() {
        let jobs = vec![job(1, "build (linux)"), job(2, "buildx")];

        let resolution = resolve("build", &jobs);
        assert!(matches!(resolution, Resolution::Prefix(found) if found.id == 2));
    }

    #[test]
    fn test_unresolved_when_nothing_matches() {
        let jobs = vec![job(1, "test"), job(2, "deploy")];

        let resolution = resolve("build", &jobs);
        assert!(matches!(resolution, Resolution::Unresolved));
        assert!(resolution.node().is_none());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let jobs = vec![job(1, "Build")];

        assert!(resolve("build", &jobs).node().is_none());
    }

    #[test]
    fn test_empty_job_list_is_unresolved() {
        assert!(resolve("build", &[]).node().is_none());
    }
}
