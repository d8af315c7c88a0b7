//! Deployment models and health derivation

use serde::{Deserialize, Serialize};

/// A running deployment as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentSummary {
    /// Deployment name, unique within the namespace
    pub name: String,

    /// Container image the deployment runs
    pub image: String,

    /// Service port the application is reachable on
    pub port: u16,

    /// Desired replica count
    pub replicas: u32,

    /// Replicas currently available. May exceed `replicas` during a
    /// rollout; callers must not assume `available <= desired`.
    pub available_replicas: u32,
}

impl DeploymentSummary {
    /// External URL the deployed application is served on
    pub fn app_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Detailed replica counts from the single-deployment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub replicas: u32,
    pub ready_replicas: u32,
    pub available_replicas: u32,
}

/// Display health of a deployment, derived at render time and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Healthy iff every desired replica is available.
pub fn derive_health(available_replicas: u32, replicas: u32) -> HealthState {
    if available_replicas == replicas {
        HealthState::Healthy
    } else {
        HealthState::Unhealthy
    }
}
