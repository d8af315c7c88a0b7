//! Deploy progress view

use crate::deploy::request::{Banner, DeployRequestController, RequestPhase, StageMark};
use crate::models::deploy::DeployStage;
use crate::views::screen::{Line, Screen, Tone};

/// Render the deploy progress panel: one indicator per pipeline stage plus
/// the result banner once the request finished.
pub fn render_progress(ctrl: &DeployRequestController) -> Screen {
    let mut screen = Screen::new();

    if ctrl.phase() == RequestPhase::Idle {
        screen.push_toned("No deploy in progress", Tone::Muted);
        return screen;
    }

    if let Some(repo_name) = ctrl.repo_name() {
        screen.push_toned(format!("Deploying {}", repo_name), Tone::Heading);
    }

    for stage in DeployStage::ALL {
        screen.push(stage_line(stage, ctrl.stage_mark(stage)));
    }
    // The unknown slot only surfaces when the backend reported a failure
    // outside the named pipeline stages.
    if ctrl.stage_mark(DeployStage::Unknown) == StageMark::Failed {
        screen.push(stage_line(DeployStage::Unknown, StageMark::Failed));
    }

    match ctrl.banner() {
        Some(Banner::Success(message)) => screen.push_toned(message.clone(), Tone::Success),
        Some(Banner::Failure(message)) => screen.push_toned(message.clone(), Tone::Error),
        None => screen.push_toned("Waiting for the backend...", Tone::Muted),
    }

    screen
}

fn stage_line(stage: DeployStage, mark: StageMark) -> Line {
    let (glyph, tone) = match mark {
        StageMark::Pending => ("⏳", Tone::Muted),
        StageMark::Succeeded => ("✅", Tone::Success),
        StageMark::Failed => ("❌", Tone::Error),
    };
    Line::toned(format!("  {} {}", glyph, stage.label()), tone)
}
