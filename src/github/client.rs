use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::auth::Token;
use crate::error::{Result, RunMapError};

use super::types::{WorkflowJob, WorkflowRun};

/// GitHub API client for fetching one workflow run and its jobs.
#[derive(Clone)]
pub struct GitHubClient {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL for the GitHub API
    base_url: String,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - GitHub API base URL (e.g., "https://api.github.com")
    /// * `owner` - Repository owner/organization
    /// * `repo` - Repository name
    /// * `token` - Optional GitHub personal access token
    pub fn new(base_url: &str, owner: String, repo: String, token: Option<Token>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|err| RunMapError::Api(format!("Invalid API base URL {base_url:?}: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("runmap/0.3"));

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|_| RunMapError::Api("Token contains invalid header characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
            owner,
            repo,
        })
    }

    /// Fetch the run's metadata record.
    pub async fn fetch_run(&self, run_id: u64) -> Result<WorkflowRun> {
        let url = format!(
            "{}/repos/{}/{}/actions/runs/{}",
            self.base_url, self.owner, self.repo, run_id
        );
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RunMapError::Api(format!(
                "Fetching run {run_id} returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch every job of the run, following pagination.
    ///
    /// Pages are concatenated in the order the API returns them, which is
    /// the platform's creation order; downstream rendering relies on it.
    pub async fn fetch_jobs(&self, run_id: u64) -> Result<Vec<WorkflowJob>> {
        let mut jobs = Vec::new();
        let mut page = 1;
        let per_page = 100;

        loop {
            let url = format!(
                "{}/repos/{}/{}/actions/runs/{}/jobs?per_page={}&page={}",
                self.base_url, self.owner, self.repo, run_id, per_page, page
            );
            debug!("GET {url}");

            let response = self.client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(RunMapError::Api(format!(
                    "Fetching jobs for run {run_id} returned {}",
                    response.status()
                )));
            }

            let body: JobsResponse = response.json().await?;
            let fetched = body.jobs.len();
            jobs.extend(body.jobs);

            if fetched < per_page {
                break;
            }

            page += 1;
        }

        Ok(jobs)
    }
}

/// Response envelope for the jobs listing.
#[derive(Deserialize)]
struct JobsResponse {
    jobs: Vec<WorkflowJob>,
}
