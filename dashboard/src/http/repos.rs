//! Repository API client

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::repository::RepositorySummary;

/// List of repositories response
#[derive(Debug, Clone, Deserialize)]
pub struct RepoListResponse {
    pub repos: Vec<RepositorySummary>,
}

impl HttpClient {
    /// Get the repositories available for deployment
    pub async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, DashboardError> {
        let response: RepoListResponse = self.get("/api/repos").await?;
        Ok(response.repos)
    }
}
