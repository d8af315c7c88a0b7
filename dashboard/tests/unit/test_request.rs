//! Deploy request controller unit tests

use shipdeck::deploy::request::{DeployRequestController, RequestPhase, StageMark};
use shipdeck::errors::DashboardError;
use shipdeck::models::deploy::{DeployOutcome, DeployStage};

#[test]
fn test_initial_state() {
    let ctrl = DeployRequestController::new();
    assert_eq!(ctrl.phase(), RequestPhase::Idle);
    assert!(ctrl.banner().is_none());
    assert!(ctrl.repo_name().is_none());
}

#[test]
fn test_successful_deploy_flow() {
    let mut ctrl = DeployRequestController::new();

    tokio_test::block_on(ctrl.execute("d1-repo", || async {
        Ok(DeployOutcome::Success {
            image: "img:1".to_string(),
            deployment: "d1".to_string(),
            port: Some(8000),
            message: None,
        })
    }));

    assert_eq!(ctrl.phase(), RequestPhase::Succeeded);
    for stage in DeployStage::ALL {
        assert_eq!(ctrl.stage_mark(stage), StageMark::Succeeded);
    }
    let banner = ctrl.banner().unwrap().message();
    assert!(banner.contains("img:1"));
    assert!(banner.contains("d1"));
}

#[test]
fn test_reported_failure_marks_stage() {
    let mut ctrl = DeployRequestController::new();

    let token = ctrl.begin("widget");
    assert_eq!(ctrl.phase(), RequestPhase::InProgress);

    ctrl.complete(
        token,
        Ok(DeployOutcome::Failure {
            stage: DeployStage::from_report(Some("build_image")),
            error: "boom".to_string(),
        }),
    );

    assert_eq!(ctrl.phase(), RequestPhase::Failed);
    assert_eq!(ctrl.stage_mark(DeployStage::Build), StageMark::Failed);
    assert_eq!(ctrl.stage_mark(DeployStage::Clone), StageMark::Pending);
    assert!(ctrl.banner().unwrap().message().contains("boom"));
}

#[test]
fn test_transport_failure_has_no_stage() {
    let mut ctrl = DeployRequestController::new();

    let token = ctrl.begin("widget");
    ctrl.complete(
        token,
        Err(DashboardError::ParseError("/api/deploy: EOF".to_string())),
    );

    assert_eq!(ctrl.phase(), RequestPhase::Failed);
    for stage in DeployStage::ALL {
        assert_eq!(ctrl.stage_mark(stage), StageMark::Pending);
    }
    assert!(ctrl.banner().unwrap().message().contains("/api/deploy: EOF"));
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut ctrl = DeployRequestController::new();

    // First deploy still in flight when a second one starts
    let stale = ctrl.begin("first");
    let current = ctrl.begin("second");

    ctrl.complete(
        stale,
        Ok(DeployOutcome::Success {
            image: "old:1".to_string(),
            deployment: "first".to_string(),
            port: None,
            message: None,
        }),
    );

    // The late first response must not overwrite the newer request
    assert_eq!(ctrl.phase(), RequestPhase::InProgress);
    assert!(ctrl.banner().is_none());

    ctrl.complete(
        current,
        Ok(DeployOutcome::Failure {
            stage: DeployStage::Deploy,
            error: "quota exceeded".to_string(),
        }),
    );
    assert_eq!(ctrl.phase(), RequestPhase::Failed);
    assert!(ctrl.banner().unwrap().message().contains("quota exceeded"));
}

#[test]
fn test_terminal_states_restart_on_begin() {
    let mut ctrl = DeployRequestController::new();

    let token = ctrl.begin("widget");
    ctrl.complete(
        token,
        Ok(DeployOutcome::Success {
            image: "img:1".to_string(),
            deployment: "widget".to_string(),
            port: None,
            message: None,
        }),
    );
    assert_eq!(ctrl.phase(), RequestPhase::Succeeded);

    // A new action restarts from a clean display
    ctrl.begin("widget");
    assert_eq!(ctrl.phase(), RequestPhase::InProgress);
    assert!(ctrl.banner().is_none());
    assert_eq!(ctrl.stage_mark(DeployStage::Validate), StageMark::Pending);
}
