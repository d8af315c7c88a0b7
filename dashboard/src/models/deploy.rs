//! Deploy pipeline result types

use serde::{Deserialize, Serialize};

/// A named step of the server-side deploy pipeline
///
/// Used for progress display only; the actual sequencing happens in the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployStage {
    Validate,
    Clone,
    Build,
    Push,
    Deploy,
    Unknown,
}

impl DeployStage {
    /// All pipeline stages, in display order
    pub const ALL: [DeployStage; 5] = [
        DeployStage::Validate,
        DeployStage::Clone,
        DeployStage::Build,
        DeployStage::Push,
        DeployStage::Deploy,
    ];

    /// Resolve a reported stage string.
    ///
    /// The backend qualifies stage names with a suffix ("build_image");
    /// only the segment before the first `_` identifies the stage. Absent
    /// or unrecognized reports resolve to `Unknown`.
    pub fn from_report(report: Option<&str>) -> Self {
        let raw = match report {
            Some(raw) => raw,
            None => return DeployStage::Unknown,
        };
        match raw.split('_').next().unwrap_or_default() {
            "validate" => DeployStage::Validate,
            "clone" => DeployStage::Clone,
            "build" => DeployStage::Build,
            "push" => DeployStage::Push,
            "deploy" => DeployStage::Deploy,
            _ => DeployStage::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeployStage::Validate => "validate",
            DeployStage::Clone => "clone",
            DeployStage::Build => "build",
            DeployStage::Push => "push",
            DeployStage::Deploy => "deploy",
            DeployStage::Unknown => "unknown",
        }
    }
}

/// Result of one deploy request, parsed from the backend payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Success {
        /// Image that was built and pushed
        image: String,

        /// Name of the deployment that was created or updated
        deployment: String,

        /// Port the application was exposed on, when reported
        port: Option<u16>,

        /// Human-readable summary from the backend
        message: Option<String>,
    },
    Failure {
        /// Pipeline stage the backend reported as failed
        stage: DeployStage,

        /// Error text, shown verbatim to the user
        error: String,
    },
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted {
        /// Cleanup summary from the backend, when present
        message: Option<String>,
    },
    Rejected {
        error: String,
    },
}
