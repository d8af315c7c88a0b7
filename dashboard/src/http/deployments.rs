//! Deployment API client

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::deploy::{DeleteOutcome, DeployOutcome, DeployStage};
use crate::models::deployment::{DeploymentStatus, DeploymentSummary};

/// Deploy request body
#[derive(Debug, Clone, Serialize)]
pub struct DeployRequest {
    pub repo_url: String,
    pub repo_name: String,
}

/// Raw deploy response, success and failure share one shape on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct DeployResponse {
    pub success: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub deployment: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TryFrom<DeployResponse> for DeployOutcome {
    type Error = DashboardError;

    fn try_from(response: DeployResponse) -> Result<Self, Self::Error> {
        if response.success {
            let image = response.image.ok_or_else(|| {
                DashboardError::ParseError("deploy success without image".to_string())
            })?;
            let deployment = response.deployment.ok_or_else(|| {
                DashboardError::ParseError("deploy success without deployment name".to_string())
            })?;
            Ok(DeployOutcome::Success {
                image,
                deployment,
                port: response.port,
                message: response.message,
            })
        } else {
            let error = response.error.ok_or_else(|| {
                DashboardError::ParseError("deploy failure without error message".to_string())
            })?;
            Ok(DeployOutcome::Failure {
                stage: DeployStage::from_report(response.stage.as_deref()),
                error,
            })
        }
    }
}

/// List of deployments response
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentListResponse {
    pub deployments: Vec<DeploymentSummary>,
}

/// Single-deployment status response
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<DeploymentStatus>,
}

/// Delete response
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TryFrom<DeleteResponse> for DeleteOutcome {
    type Error = DashboardError;

    fn try_from(response: DeleteResponse) -> Result<Self, Self::Error> {
        if response.success {
            Ok(DeleteOutcome::Deleted {
                message: response.message,
            })
        } else {
            let error = response.error.ok_or_else(|| {
                DashboardError::ParseError("delete failure without error message".to_string())
            })?;
            Ok(DeleteOutcome::Rejected { error })
        }
    }
}

impl HttpClient {
    /// Ask the backend to deploy a repository
    pub async fn deploy(&self, repo_url: &str, repo_name: &str) -> Result<DeployOutcome, DashboardError> {
        let request = DeployRequest {
            repo_url: repo_url.to_string(),
            repo_name: repo_name.to_string(),
        };
        let response: DeployResponse = self.post_lenient("/api/deploy", &request).await?;
        response.try_into()
    }

    /// Get all running deployments
    pub async fn list_deployments(&self) -> Result<Vec<DeploymentSummary>, DashboardError> {
        let response: DeploymentListResponse = self.get("/api/deployments").await?;
        Ok(response.deployments)
    }

    /// Get detailed status for one deployment, None when it is not reported
    pub async fn deployment_status(&self, name: &str) -> Result<Option<DeploymentStatus>, DashboardError> {
        let path = format!("/api/deployment/{}", name);
        let response: StatusResponse = self.get(&path).await?;
        Ok(response.status)
    }

    /// Delete a deployment
    pub async fn delete_deployment(&self, name: &str) -> Result<DeleteOutcome, DashboardError> {
        let path = format!("/api/deployment/{}", name);
        let response: DeleteResponse = self.delete_lenient(&path).await?;
        response.try_into()
    }
}
