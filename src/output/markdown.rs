use std::fmt::Write;

use crate::graph::{self, GraphFormat};
use crate::report::RunReport;
use crate::timing;

/// Render the Markdown summary document for a run.
///
/// Heading, result line, fenced dependency graph, then the per-job timing
/// table sorted by job name.
pub fn render_markdown(report: &RunReport, format: GraphFormat) -> String {
    let mut doc = String::new();
    let run = &report.run;

    let title = run.name.as_deref().unwrap_or("Workflow run");
    let outcome = run.conclusion.as_deref().unwrap_or(&run.status);

    let _ = writeln!(doc, "## {title}");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "Run {} in `{}`: **{outcome}**", run.id, report.repo);
    let _ = writeln!(doc);

    let _ = writeln!(doc, "### Dependency graph");
    let _ = writeln!(doc);
    let fence = match format {
        GraphFormat::Mermaid => "mermaid",
    };
    let _ = writeln!(doc, "```{fence}");
    doc.push_str(&graph::render(&report.jobs, &report.edges));
    let _ = writeln!(doc, "```");
    let _ = writeln!(doc);

    let _ = writeln!(doc, "### Job timings");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "| Job | Result | Wait | Duration |");
    let _ = writeln!(doc, "| --- | --- | --- | --- |");

    let mut jobs: Vec<_> = report.jobs.iter().collect();
    jobs.sort_by(|a, b| a.name.cmp(&b.name));

    let anchor = report.started_anchor();
    for job in jobs {
        let wait = timing::delta(anchor, job.started_at.as_deref());
        let duration = timing::delta(job.started_at.as_deref(), job.completed_at.as_deref());
        let _ = writeln!(
            doc,
            "| {} | {} | {} | {} |",
            escape_cell(&job.name),
            job.conclusion.as_deref().unwrap_or(&job.status),
            timing::format_duration(wait),
            timing::format_duration(duration)
        );
    }

    doc
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
