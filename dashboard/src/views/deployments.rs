//! Deployment list and detail views

use crate::models::deployment::{
    derive_health, DeploymentStatus, DeploymentSummary, HealthState,
};
use crate::views::screen::{Line, Screen, Span, Tone};

/// Render the deployment listing
pub fn render_deployments(items: &[DeploymentSummary]) -> Screen {
    let mut screen = Screen::new();

    if items.is_empty() {
        screen.push_toned("No deployments found", Tone::Muted);
        return screen;
    }

    for (index, deployment) in items.iter().enumerate() {
        let health = derive_health(deployment.available_replicas, deployment.replicas);
        let (glyph, tone) = match health {
            HealthState::Healthy => ("✅ Healthy", Tone::Success),
            HealthState::Unhealthy => ("⚠️ Unhealthy", Tone::Warning),
        };

        screen.push(Line::new(vec![
            Span::new(format!("[{}] {}  ", index + 1, deployment.name), Tone::Heading),
            Span::new(glyph, tone),
        ]));
        screen.push_plain(format!(
            "    Replicas: {}/{}  Image: {}  Port: {}",
            deployment.available_replicas, deployment.replicas, deployment.image, deployment.port
        ));
        screen.push(Line::new(vec![
            Span::new(format!("    {}", deployment.app_url()), Tone::Plain),
            Span::new(
                format!(
                    "  (details {name} | delete {name})",
                    name = deployment.name
                ),
                Tone::Muted,
            ),
        ]));
    }

    screen
}

/// Render the detail card for one deployment
pub fn render_details(name: &str, status: &DeploymentStatus) -> Screen {
    let mut screen = Screen::new();
    screen.push_toned(format!("Deployment: {}", name), Tone::Heading);
    screen.push_plain(format!("    Replicas:  {}", status.replicas));
    screen.push_plain(format!("    Ready:     {}", status.ready_replicas));
    screen.push_plain(format!("    Available: {}", status.available_replicas));
    screen
}
