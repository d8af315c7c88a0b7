//! Actions on a single named deployment

use tracing::{debug, error};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::deploy::DeleteOutcome;
use crate::models::deployment::DeploymentStatus;

/// What the surface should do after a delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteAction {
    /// The user declined; nothing was sent
    Cancelled,

    /// Deleted server-side; the deployment list must be re-fetched
    Deleted { message: Option<String> },

    /// Reported or transport failure; show the error, keep local state
    Failed { error: String },
}

/// Fetch-detail and delete flows for one named deployment
pub struct DeploymentActions<'a> {
    client: &'a HttpClient,
}

impl<'a> DeploymentActions<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetch detailed status. Failures and absent statuses are logged and
    /// produce no visible error.
    pub async fn fetch_details(&self, name: &str) -> Option<DeploymentStatus> {
        match self.client.deployment_status(name).await {
            Ok(Some(status)) => Some(status),
            Ok(None) => {
                debug!("No status reported for deployment {}", name);
                None
            }
            Err(e) => {
                error!("Error getting deployment details: {}", e);
                None
            }
        }
    }

    /// Delete a deployment. Refuses to send anything unless the caller
    /// collected an explicit confirmation first.
    pub async fn delete(&self, name: &str, confirmed: bool) -> DeleteAction {
        if !confirmed {
            return DeleteAction::Cancelled;
        }
        resolve_delete(self.client.delete_deployment(name).await)
    }
}

/// Map a delete response or transport failure into the surface action.
pub fn resolve_delete(result: Result<DeleteOutcome, DashboardError>) -> DeleteAction {
    match result {
        Ok(DeleteOutcome::Deleted { message }) => DeleteAction::Deleted { message },
        Ok(DeleteOutcome::Rejected { error }) => DeleteAction::Failed { error },
        Err(e) => DeleteAction::Failed {
            error: e.to_string(),
        },
    }
}
