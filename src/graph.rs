use std::fmt::Write;

use crate::github::types::WorkflowJob;
use crate::resolve;
use crate::workflow::LogicalEdge;

/// Graph notation for the rendered dependency graph.
///
/// Only Mermaid is implemented today. An unrecognized name logs a warning
/// and falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    #[default]
    Mermaid,
}

impl GraphFormat {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mermaid" => GraphFormat::Mermaid,
            other => {
                log::warn!("Unsupported graph format {other:?}, falling back to mermaid");
                GraphFormat::Mermaid
            }
        }
    }
}

/// Render the run's dependency graph as Mermaid `flowchart LR` source.
///
/// One declaration line per job in input order, one edge line per declared
/// edge whose endpoints both resolve. An edge with an unresolved endpoint
/// is dropped without a warning; the rest of the graph still renders.
/// Duplicate edges are kept as-is. Output depends only on the input order:
/// identical inputs render byte-identical text.
pub fn render(jobs: &[WorkflowJob], edges: &[LogicalEdge]) -> String {
    let mut out = String::from("flowchart LR\n");

    for job in jobs {
        let outcome = job.conclusion.as_deref().unwrap_or(&job.status);
        let _ = writeln!(
            out,
            "  {}[\"{} ({})\"]",
            node_ident(job),
            escape_label(&job.name),
            escape_label(outcome)
        );
    }

    for edge in edges {
        let from = resolve::resolve(edge.from_id(), jobs).node();
        let to = resolve::resolve(edge.to_id(), jobs).node();
        if let (Some(from), Some(to)) = (from, to) {
            let _ = writeln!(out, "  {} --> {}", node_ident(from), node_ident(to));
        }
    }

    out
}

/// Mermaid identifier for a job: the name with everything outside
/// `[A-Za-z0-9_]` replaced by `_`, plus the numeric id. The id keeps
/// identifiers unique even when sanitization collapses two distinct names.
pub fn node_ident(job: &WorkflowJob) -> String {
    let sanitized: String = job
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("{sanitized}_{}", job.id)
}

fn escape_label(text: &str) -> String {
    text.replace('"', "&quot;")
}
