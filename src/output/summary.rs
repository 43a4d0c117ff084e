use std::fmt::Write;

use crate::report::RunReport;
use crate::timing;

use super::styling::{bright, bright_yellow, cyan, dim, outcome};
use super::tables::{create_table, header_cells, result_cell};

/// Prints a human-readable summary of the run to stdout.
///
/// Displays an overview (repository, run, result, job count) followed by a
/// color-coded timing table with one row per job, sorted by job name.
pub fn print_summary(report: &RunReport) {
    println!("{}", render_summary(report));
}

fn add_section_header(output: &mut String, emoji: &str, title: &str) {
    let _ = writeln!(output, "{} {}", bright(emoji), bright(title).underlined());
}

fn render_summary(report: &RunReport) -> String {
    let mut output = String::new();
    let run = &report.run;

    add_section_header(&mut output, "📊", "Run Overview");

    let result = run.conclusion.as_deref().unwrap_or(&run.status);

    output.push_str(&format!(
        "  {} {}\n  {} {}\n  {} {}\n  {} {}\n\n",
        dim("Repository:"),
        cyan(&report.repo),
        dim("Run:"),
        bright_yellow(format!(
            "{} ({})",
            run.name.as_deref().unwrap_or("unnamed"),
            run.id
        )),
        dim("Result:"),
        outcome(result),
        dim("Jobs:"),
        bright_yellow(report.jobs.len()),
    ));

    if report.jobs.is_empty() {
        output.push_str(&format!("{}\n", bright_yellow("No jobs reported for this run.")));
        return output;
    }

    add_section_header(&mut output, "⏱", "Job Timings");

    let mut table = create_table();
    table.set_header(header_cells(&["Job", "Result", "Wait", "Duration"]));

    // Stable sort by name keeps matrix siblings in creation order.
    let mut jobs: Vec<_> = report.jobs.iter().collect();
    jobs.sort_by(|a, b| a.name.cmp(&b.name));

    let anchor = report.started_anchor();
    for job in jobs {
        let wait = timing::delta(anchor, job.started_at.as_deref());
        let duration = timing::delta(job.started_at.as_deref(), job.completed_at.as_deref());
        table.add_row(vec![
            comfy_table::Cell::new(&job.name),
            result_cell(job.conclusion.as_deref().unwrap_or(&job.status)),
            comfy_table::Cell::new(timing::format_duration(wait)),
            comfy_table::Cell::new(timing::format_duration(duration)),
        ]);
    }

    let _ = writeln!(output, "{table}");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::{WorkflowJob, WorkflowRun};

    fn test_job(id: u64, name: &str, conclusion: Option<&str>) -> WorkflowJob {
        WorkflowJob {
            id,
            name: name.to_owned(),
            status: "completed".to_owned(),
            conclusion: conclusion.map(str::to_owned),
            started_at: Some("2024-05-01T10:00:30Z".to_owned()),
            completed_at: Some("2024-05-01T10:02:00Z".to_owned()),
            steps: vec![],
        }
    }

    fn test_report(jobs: Vec<WorkflowJob>) -> RunReport {
        RunReport {
            repo: "acme/widgets".to_owned(),
            run: WorkflowRun {
                id: 42,
                name: Some("CI".to_owned()),
                head_sha: None,
                path: None,
                status: "completed".to_owned(),
                conclusion: Some("failure".to_owned()),
                created_at: Some("2024-05-01T10:00:00Z".to_owned()),
                run_started_at: Some("2024-05-01T10:00:05Z".to_owned()),
            },
            jobs,
            edges: vec![],
            workflow_path: None,
        }
    }

    #[test]
    fn test_render_summary_overview() {
        let output = render_summary(&test_report(vec![test_job(1, "build", Some("success"))]));

        assert!(output.contains("Run Overview"));
        assert!(output.contains("acme/widgets"));
        assert!(output.contains("CI (42)"));
        assert!(output.contains("failure"));
    }

    #[test]
    fn test_render_summary_empty_jobs() {
        let output = render_summary(&test_report(vec![]));

        assert!(output.contains("No jobs reported for this run."));
        assert!(!output.contains("Job Timings"));
    }

    #[test]
    fn test_render_summary_rows_sorted_by_name() {
        let output = render_summary(&test_report(vec![
            test_job(1, "zeta", Some("success")),
            test_job(2, "alpha", Some("success")),
        ]));

        let alpha = output.find("alpha").unwrap();
        let zeta = output.find("zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_render_summary_formats_durations() {
        let output = render_summary(&test_report(vec![test_job(1, "build", Some("success"))]));

        // Wait: 10:00:05 -> 10:00:30, duration: 10:00:30 -> 10:02:00.
        assert!(output.contains("25s"));
        assert!(output.contains("1m 30s"));
    }

    #[test]
    fn test_render_summary_placeholder_for_missing_timestamps() {
        let mut job = test_job(1, "queued-job", None);
        job.started_at = None;
        job.completed_at = None;

        let output = render_summary(&test_report(vec![job]));

        assert!(output.contains("—"));
    }
}
