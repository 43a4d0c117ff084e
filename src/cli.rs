use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use crate::auth::Token;
use crate::config::Config;
use crate::export;
use crate::github::client::GitHubClient;
use crate::graph::GraphFormat;
use crate::output;
use crate::report::RunReport;
use crate::workflow;

#[derive(Parser)]
#[command(name = "runmap")]
#[command(author, version, about = "Workflow Run Summary Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the export payload JSON here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    /// Explicit config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single workflow run
    Run {
        #[arg(short, long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// GitHub API base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Repository in 'owner/repo' form
        #[arg(short = 'R', long)]
        repo: Option<String>,

        /// Workflow run id
        #[arg(short = 'i', long = "run")]
        run_id: u64,

        /// Checkout root used to locate the workflow definition file
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Explicit workflow file path (overrides --workspace discovery)
        #[arg(short = 'f', long)]
        workflow_file: Option<PathBuf>,

        /// Graph notation for the dependency graph
        #[arg(short, long)]
        graph_format: Option<String>,

        /// Write the Markdown summary document here
        #[arg(short, long)]
        summary: Option<PathBuf>,
    },
}

impl Cli {
    #[allow(clippy::too_many_arguments)]
    async fn execute_run(
        &self,
        token: &Option<String>,
        url: Option<&str>,
        repo: Option<&str>,
        run_id: u64,
        workspace: Option<&Path>,
        workflow_file: Option<&Path>,
        graph_format: Option<&str>,
        summary: Option<&Path>,
    ) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        let repo = repo
            .map(str::to_owned)
            .or_else(|| config.github.repo.clone())
            .context("No repository given; pass --repo or set github.repo in the config file")?;
        let (owner, name) = split_repo(&repo)?;

        let url = url
            .map(str::to_owned)
            .unwrap_or_else(|| config.github.base_url.clone());
        let token = token
            .clone()
            .or_else(|| config.github.token.clone())
            .map(|t| Token::from(t.as_str()));

        info!("Summarizing run {run_id} of {repo}");

        let client = GitHubClient::new(&url, owner.to_owned(), name.to_owned(), token)?;

        let progress = output::PhaseProgress::start_fetch_run();
        let run = client.fetch_run(run_id).await?;
        let progress = progress.finish_fetch_run_start_jobs();
        let jobs = client.fetch_jobs(run_id).await?;
        let progress = progress.finish_jobs_start_render();

        let workspace = workspace
            .map(Path::to_path_buf)
            .or_else(|| config.github.workspace.clone());
        let definition_path = workflow_file.map(Path::to_path_buf).or_else(|| {
            match (&workspace, &run.path) {
                (Some(root), Some(path)) => Some(root.join(path)),
                _ => None,
            }
        });

        let edges = match &definition_path {
            Some(path) => workflow::parse_definition(path)?,
            None => Vec::new(),
        };
        let workflow_path = workflow_file
            .map(|p| p.display().to_string())
            .or_else(|| run.path.clone());

        let format = GraphFormat::parse(graph_format.unwrap_or(&config.output.graph_format));

        let report = RunReport {
            repo: repo.clone(),
            run,
            jobs,
            edges,
            workflow_path,
        };

        let markdown = output::render_markdown(&report, format);
        progress.finish_render();

        if let Some(path) = summary {
            std::fs::write(path, &markdown)
                .with_context(|| format!("Failed to write summary file: {}", path.display()))?;
            info!("Summary written to: {}", path.display());
        }

        let payload = export::build_payload(&report);
        let json = export::to_json(&payload, self.pretty || config.output.pretty)?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, json)?;
            info!("Export payload written to: {}", output_path.display());
            output::print_summary(&report);
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Run {
                token,
                url,
                repo,
                run_id,
                workspace,
                workflow_file,
                graph_format,
                summary,
            } => {
                self.execute_run(
                    token,
                    url.as_deref(),
                    repo.as_deref(),
                    *run_id,
                    workspace.as_deref(),
                    workflow_file.as_deref(),
                    graph_format.as_deref(),
                    summary.as_deref(),
                )
                .await
            }
        }
    }
}

fn split_repo(repo: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        anyhow::bail!("Repository must be in format 'owner/repo'");
    }
    Ok((parts[0], parts[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repo_valid() {
        let (owner, name) = split_repo("acme/widgets").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(name, "widgets");
    }

    #[test]
    fn test_split_repo_rejects_missing_slash() {
        let result = split_repo("invalid-path");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("owner/repo"));
    }

    #[test]
    fn test_split_repo_rejects_extra_segments() {
        assert!(split_repo("owner/repo/extra").is_err());
    }

    #[test]
    fn test_split_repo_rejects_empty_sides() {
        assert!(split_repo("/repo").is_err());
        assert!(split_repo("owner/").is_err());
    }
}
