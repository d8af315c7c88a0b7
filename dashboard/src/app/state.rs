//! Application state management

use crate::app::options::AppOptions;
use crate::deploy::request::DeployRequestController;
use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::deployment::DeploymentSummary;
use crate::models::repository::RepositorySummary;
use crate::views::repos::filter_repositories;

/// Dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Repositories,
    Deployments,
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "repositories" | "repos" => Ok(Tab::Repositories),
            "deployments" => Ok(Tab::Deployments),
            _ => Err(format!("Invalid tab: {}", s)),
        }
    }
}

/// Main application state
///
/// Both collections are owned here and replaced wholesale by the latest
/// completed list fetch; nothing merges incrementally.
pub struct AppState {
    /// HTTP client for backend communication
    pub http_client: HttpClient,

    /// Repositories from the last successful list fetch
    pub repos: Vec<RepositorySummary>,

    /// Deployments from the last successful list fetch
    pub deployments: Vec<DeploymentSummary>,

    /// Deploy progress display state
    pub deploy_ctrl: DeployRequestController,

    /// Active tab
    pub tab: Tab,

    /// Current repository search query, empty shows everything
    pub search: String,
}

impl AppState {
    /// Initialize application state
    pub fn init(options: &AppOptions) -> Result<Self, DashboardError> {
        Ok(Self {
            http_client: HttpClient::new(&options.backend_base_url)?,
            repos: Vec::new(),
            deployments: Vec::new(),
            deploy_ctrl: DeployRequestController::new(),
            tab: options.initial_tab,
            search: String::new(),
        })
    }

    /// Repositories matching the current search query
    pub fn visible_repos(&self) -> Vec<&RepositorySummary> {
        filter_repositories(&self.repos, &self.search)
    }

    /// Resolve a repository by 1-based index into the visible listing or
    /// by exact name
    pub fn find_repo(&self, selector: &str) -> Option<&RepositorySummary> {
        let visible = self.visible_repos();
        if let Ok(index) = selector.parse::<usize>() {
            return visible.get(index.checked_sub(1)?).copied();
        }
        visible.into_iter().find(|repo| repo.name == selector)
    }

    /// Resolve a deployment name by 1-based index or pass the name through.
    /// Unknown names are accepted; the backend is the authority.
    pub fn resolve_deployment_name(&self, selector: &str) -> String {
        if let Ok(index) = selector.parse::<usize>() {
            if let Some(deployment) = index
                .checked_sub(1)
                .and_then(|index| self.deployments.get(index))
            {
                return deployment.name.clone();
            }
        }
        selector.to_string()
    }
}
