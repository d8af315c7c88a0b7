//! Deploy request controller
//!
//! One deploy action runs Idle → InProgress → {Succeeded, Failed}. The
//! terminal states are dead ends; a new `begin` always restarts from
//! scratch. Each invocation gets a monotonically increasing token and
//! completions carrying a stale token are discarded, so a slow earlier
//! request can never overwrite the display of a newer one.

use std::future::Future;

use tracing::debug;

use crate::errors::DashboardError;
use crate::models::deploy::{DeployOutcome, DeployStage};

/// Identifies one deploy invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Progress mark of a single pipeline stage indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    Pending,
    Succeeded,
    Failed,
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    InProgress,
    Succeeded,
    Failed,
}

/// Result banner shown under the stage indicators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Failure(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success(message) | Banner::Failure(message) => message,
        }
    }
}

// Stage indicator slots: the five pipeline stages plus the unknown fallback.
const STAGE_SLOTS: usize = 6;

/// Orchestrates a single deploy action and its progress display
pub struct DeployRequestController {
    phase: RequestPhase,
    repo_name: Option<String>,
    marks: [StageMark; STAGE_SLOTS],
    banner: Option<Banner>,
    next_token: u64,
    current: Option<RequestToken>,
}

impl DeployRequestController {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            repo_name: None,
            marks: [StageMark::Pending; STAGE_SLOTS],
            banner: None,
            next_token: 0,
            current: None,
        }
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repo_name.as_deref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn stage_mark(&self, stage: DeployStage) -> StageMark {
        self.marks[slot(stage)]
    }

    /// Start a new deploy action: resets every stage indicator to pending,
    /// clears the previous banner, and hands out the invocation's token.
    pub fn begin(&mut self, repo_name: &str) -> RequestToken {
        self.phase = RequestPhase::InProgress;
        self.repo_name = Some(repo_name.to_string());
        self.marks = [StageMark::Pending; STAGE_SLOTS];
        self.banner = None;

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.current = Some(token);
        token
    }

    /// Finish the invocation identified by `token`.
    ///
    /// A reported failure marks the indicator of the stage the backend
    /// named; a transport or parse failure marks no stage. Stale tokens
    /// are discarded without touching the display.
    pub fn complete(&mut self, token: RequestToken, result: Result<DeployOutcome, DashboardError>) {
        if self.current != Some(token) {
            debug!("Discarding stale deploy completion (token {:?})", token);
            return;
        }
        self.current = None;

        match result {
            Ok(DeployOutcome::Success {
                image, deployment, ..
            }) => {
                for stage in DeployStage::ALL {
                    self.marks[slot(stage)] = StageMark::Succeeded;
                }
                let repo = self.repo_name.as_deref().unwrap_or(&deployment);
                self.banner = Some(Banner::Success(format!(
                    "Successfully deployed {}! Image: {}  Deployment: {}",
                    repo, image, deployment
                )));
                self.phase = RequestPhase::Succeeded;
            }
            Ok(DeployOutcome::Failure { stage, error }) => {
                self.marks[slot(stage)] = StageMark::Failed;
                self.banner = Some(Banner::Failure(format!("Deployment failed: {}", error)));
                self.phase = RequestPhase::Failed;
            }
            Err(error) => {
                self.banner = Some(Banner::Failure(format!("Deployment failed: {}", error)));
                self.phase = RequestPhase::Failed;
            }
        }
    }

    /// Drive one full deploy cycle through an injected send function
    pub async fn execute<F, Fut>(&mut self, repo_name: &str, send: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<DeployOutcome, DashboardError>>,
    {
        let token = self.begin(repo_name);
        let result = send().await;
        self.complete(token, result);
    }
}

impl Default for DeployRequestController {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(stage: DeployStage) -> usize {
    match stage {
        DeployStage::Validate => 0,
        DeployStage::Clone => 1,
        DeployStage::Build => 2,
        DeployStage::Push => 3,
        DeployStage::Deploy => 4,
        DeployStage::Unknown => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_display() {
        let mut ctrl = DeployRequestController::new();

        let token = ctrl.begin("widget");
        ctrl.complete(
            token,
            Ok(DeployOutcome::Failure {
                stage: DeployStage::Build,
                error: "boom".to_string(),
            }),
        );
        assert_eq!(ctrl.stage_mark(DeployStage::Build), StageMark::Failed);
        assert!(ctrl.banner().is_some());

        ctrl.begin("widget");
        assert_eq!(ctrl.phase(), RequestPhase::InProgress);
        assert_eq!(ctrl.stage_mark(DeployStage::Build), StageMark::Pending);
        assert!(ctrl.banner().is_none());
    }

    #[test]
    fn test_transport_failure_marks_no_stage() {
        let mut ctrl = DeployRequestController::new();
        let token = ctrl.begin("widget");
        ctrl.complete(
            token,
            Err(DashboardError::ApiError("502 Bad Gateway".to_string())),
        );

        assert_eq!(ctrl.phase(), RequestPhase::Failed);
        for stage in DeployStage::ALL {
            assert_eq!(ctrl.stage_mark(stage), StageMark::Pending);
        }
        assert!(ctrl.banner().unwrap().message().contains("502 Bad Gateway"));
    }
}
