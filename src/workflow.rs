use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RunMapError};

/// A dependency edge as authored in the workflow file: the job named by
/// `.0` must finish before the job named by `.1` may start.
///
/// Endpoints are job identifiers, not runtime job names; nothing guarantees
/// a matching runtime record exists for either side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalEdge(pub String, pub String);

impl LogicalEdge {
    pub fn from_id(&self) -> &str {
        &self.0
    }

    pub fn to_id(&self) -> &str {
        &self.1
    }
}

/// The subset of a workflow file this tool cares about: the ordered `jobs`
/// mapping and each job's `needs` declaration. Everything else is ignored.
#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    jobs: IndexMap<String, JobSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct JobSpec {
    needs: Option<Needs>,
}

/// `needs` accepts either a single job id or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Needs {
    One(String),
    Many(Vec<String>),
}

impl Needs {
    fn into_vec(self) -> Vec<String> {
        match self {
            Needs::One(id) => vec![id],
            Needs::Many(ids) => ids,
        }
    }
}

/// Extract the declared dependency edges from a workflow file.
///
/// A missing file is not an error and yields an empty edge list; a file
/// that exists but fails to parse is fatal. Edges are emitted in document
/// order, one per `(predecessor, job)` pair.
pub fn parse_definition(path: &Path) -> Result<Vec<LogicalEdge>> {
    if !path.exists() {
        log::debug!("Workflow file {} not found, no declared edges", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)?;
    let definition: Definition =
        serde_yaml::from_str(&contents).map_err(|source| RunMapError::MalformedDefinition {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(edges_from(definition))
}

fn edges_from(definition: Definition) -> Vec<LogicalEdge> {
    let mut edges = Vec::new();
    for (job_id, spec) in definition.jobs {
        let Some(needs) = spec.needs else { continue };
        for predecessor in needs.into_vec() {
            edges.push(LogicalEdge(predecessor, job_id.clone()));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_str(yaml: &str) -> Vec<LogicalEdge> {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        write!(file, "{yaml}").unwrap();
        parse_definition(file.path()).unwrap()
    }

    #[test]
    fn test_missing_file_yields_no_edges() {
        let edges = parse_definition(Path::new("does/not/exist.yml")).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        write!(file, "jobs: [not, a, mapping").unwrap();

        let err = parse_definition(file.path()).unwrap_err();
        assert!(matches!(err, RunMapError::MalformedDefinition { .. }));
        assert!(err.to_string().contains("Malformed workflow definition"));
    }

    #[test]
    fn test_needs_as_single_string() {
        let edges = parse_str(
            r"
name: CI
on: push
jobs:
  build:
    runs-on: ubuntu-latest
  test:
    runs-on: ubuntu-latest
    needs: build
",
        );
        assert_eq!(edges, vec![LogicalEdge("build".into(), "test".into())]);
    }

    #[test]
    fn test_needs_as_list_preserves_order() {
        let edges = parse_str(
            r"
jobs:
  build: {}
  lint: {}
  deploy:
    needs: [build, lint]
  notify:
    needs: deploy
",
        );
        assert_eq!(
            edges,
            vec![
                LogicalEdge("build".into(), "deploy".into()),
                LogicalEdge("lint".into(), "deploy".into()),
                LogicalEdge("deploy".into(), "notify".into()),
            ]
        );
    }

    #[test]
    fn test_jobs_without_needs_contribute_nothing() {
        let edges = parse_str(
            r"
jobs:
  build:
    runs-on: ubuntu-latest
  docs:
    runs-on: ubuntu-latest
",
        );
        assert!(edges.is_empty());
    }

    #[test]
    fn test_file_without_jobs_mapping() {
        let edges = parse_str("name: empty\non: push\n");
        assert!(edges.is_empty());
    }

    #[test]
    fn test_edges_serialize_as_pairs() {
        let json =
            serde_json::to_string(&LogicalEdge("build".into(), "test".into())).unwrap();
        assert_eq!(json, r#"["build","test"]"#);
    }
}
