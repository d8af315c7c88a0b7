//! View and filter unit tests

use shipdeck::models::deployment::{DeploymentStatus, DeploymentSummary};
use shipdeck::models::repository::RepositorySummary;
use shipdeck::views::deployments::{render_deployments, render_details};
use shipdeck::views::repos::{filter_repositories, render_repositories};

fn repo(name: &str, description: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        full_name: Some(format!("acme/{name}")),
        description: description.map(str::to_string),
        language: Some("Rust".to_string()),
        updated_at: "2026-02-01T12:00:00Z".to_string(),
        clone_url: format!("https://git.example.com/acme/{name}.git"),
    }
}

fn deployment(name: &str, available: u32, desired: u32) -> DeploymentSummary {
    DeploymentSummary {
        name: name.to_string(),
        image: format!("acme/{name}:latest"),
        port: 3000,
        replicas: desired,
        available_replicas: available,
    }
}

#[test]
fn test_empty_query_returns_all_in_order() {
    let items = vec![repo("zeta", None), repo("alpha", None), repo("mid", None)];
    let hits = filter_repositories(&items, "");
    let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_filter_is_case_insensitive() {
    let items = vec![repo("Foo", Some("bar"))];
    let hits = filter_repositories(&items, "FOO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Foo");
}

#[test]
fn test_absent_description_does_not_match_or_panic() {
    let items = vec![repo("Foo", None)];
    assert!(filter_repositories(&items, "baz").is_empty());
}

#[test]
fn test_empty_repository_list_renders_placeholder() {
    let screen = render_repositories(&[]);
    assert_eq!(screen.to_plain_lines(), vec!["No repositories found"]);
}

#[test]
fn test_repository_render_contents() {
    let items = vec![repo("widget", Some("a web widget"))];
    let visible = filter_repositories(&items, "");
    let text = render_repositories(&visible).to_plain_lines().join("\n");
    assert!(text.contains("acme/widget"));
    assert!(text.contains("a web widget"));
    assert!(text.contains("Rust"));
    assert!(text.contains("Updated: 2026-02-01"));
}

#[test]
fn test_empty_deployment_list_renders_placeholder() {
    let screen = render_deployments(&[]);
    assert_eq!(screen.to_plain_lines(), vec!["No deployments found"]);
}

#[test]
fn test_deployment_render_health_and_url() {
    let items = vec![deployment("widget", 2, 2), deployment("wobble", 1, 2)];
    let lines = render_deployments(&items).to_plain_lines();
    let text = lines.join("\n");

    assert!(text.contains("Healthy"));
    assert!(text.contains("Unhealthy"));
    assert!(text.contains("Replicas: 2/2"));
    assert!(text.contains("Replicas: 1/2"));
    assert!(text.contains("http://localhost:3000"));
    assert!(text.contains("acme/widget:latest"));
}

#[test]
fn test_over_provisioned_deployment_renders_without_panic() {
    // available > desired is tolerated, not treated as an invariant
    let items = vec![deployment("widget", 3, 2)];
    let text = render_deployments(&items).to_plain_lines().join("\n");
    assert!(text.contains("Replicas: 3/2"));
    assert!(text.contains("Unhealthy"));
}

#[test]
fn test_details_render() {
    let status = DeploymentStatus {
        replicas: 2,
        ready_replicas: 1,
        available_replicas: 1,
    };
    let lines = render_details("widget", &status).to_plain_lines();
    assert_eq!(lines[0], "Deployment: widget");
    assert!(lines.iter().any(|line| line.contains("Ready:     1")));
    assert!(lines.iter().any(|line| line.contains("Available: 1")));
}
