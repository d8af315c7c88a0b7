//! Main application run loop
//!
//! One logical task: read a command, call the backend, render. Every
//! network call is a single-shot await; the collections and the deploy
//! progress display are simply overwritten by the latest completed
//! operation.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

use crate::app::options::AppOptions;
use crate::app::state::{AppState, Tab};
use crate::deploy::actions::{DeleteAction, DeploymentActions};
use crate::errors::DashboardError;
use crate::views::deployments::{render_deployments, render_details};
use crate::views::progress::render_progress;
use crate::views::repos::render_repositories;
use crate::views::screen::{Screen, Tone};

/// A parsed dashboard command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowRepos,
    ShowDeployments,
    Search(String),
    Deploy(String),
    Details(String),
    Delete(String),
    Refresh,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split_whitespace();
        let head = match parts.next() {
            Some(head) => head,
            None => return Command::Empty,
        };
        let rest = parts.collect::<Vec<_>>().join(" ");

        match head {
            "repos" | "repositories" => Command::ShowRepos,
            "deployments" => Command::ShowDeployments,
            "search" => Command::Search(rest),
            "deploy" if !rest.is_empty() => Command::Deploy(rest),
            "details" if !rest.is_empty() => Command::Details(rest),
            "delete" if !rest.is_empty() => Command::Delete(rest),
            "refresh" => Command::Refresh,
            "help" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(raw.trim().to_string()),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Run the dashboard
pub async fn run(
    version: String,
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DashboardError> {
    info!(
        "Starting shipdeck {} against {}",
        version, options.backend_base_url
    );

    let mut state = AppState::init(&options)?;

    // Initial load of the startup tab, as the dashboard page does
    reload_active_tab(&mut state).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tokio::pin!(shutdown_signal);

    loop {
        prompt("shipdeck> ")?;

        tokio::select! {
            _ = &mut shutdown_signal => {
                println!();
                info!("Shutdown signal received, exiting...");
                return Ok(());
            }
            line = lines.next_line() => {
                let raw = match line? {
                    Some(raw) => raw,
                    None => return Ok(()),
                };
                match dispatch(&mut state, Command::parse(&raw), &mut lines).await? {
                    Flow::Continue => {}
                    Flow::Quit => return Ok(()),
                }
            }
        }
    }
}

async fn dispatch(
    state: &mut AppState,
    command: Command,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<Flow, DashboardError> {
    match command {
        Command::ShowRepos => {
            state.tab = Tab::Repositories;
            load_repositories(state).await;
        }
        Command::ShowDeployments => {
            state.tab = Tab::Deployments;
            load_deployments(state).await;
        }
        Command::Search(query) => {
            state.search = query;
            if state.tab == Tab::Repositories {
                render_repositories(&state.visible_repos()).print();
            } else {
                notice("Search applies to the repositories tab", Tone::Muted);
            }
        }
        Command::Refresh => reload_active_tab(state).await,
        Command::Deploy(selector) => deploy(state, &selector).await,
        Command::Details(selector) => {
            let name = state.resolve_deployment_name(&selector);
            let actions = DeploymentActions::new(&state.http_client);
            if let Some(status) = actions.fetch_details(&name).await {
                render_details(&name, &status).print();
            }
        }
        Command::Delete(selector) => delete(state, &selector, lines).await?,
        Command::Help => help().print(),
        Command::Quit => return Ok(Flow::Quit),
        Command::Empty => {}
        Command::Unknown(raw) => {
            notice(
                format!("Unknown command: {raw:?} (try \"help\")"),
                Tone::Muted,
            );
        }
    }
    Ok(Flow::Continue)
}

async fn reload_active_tab(state: &mut AppState) {
    match state.tab {
        Tab::Repositories => load_repositories(state).await,
        Tab::Deployments => load_deployments(state).await,
    }
}

async fn load_repositories(state: &mut AppState) {
    notice("Loading repositories...", Tone::Muted);
    match state.http_client.list_repositories().await {
        Ok(repos) => {
            state.repos = repos;
            render_repositories(&state.visible_repos()).print();
        }
        Err(e) => {
            error!("Error loading repositories: {}", e);
            notice(format!("Failed to load repositories: {e}"), Tone::Error);
        }
    }
}

async fn load_deployments(state: &mut AppState) {
    notice("Loading deployments...", Tone::Muted);
    match state.http_client.list_deployments().await {
        Ok(deployments) => {
            state.deployments = deployments;
            render_deployments(&state.deployments).print();
        }
        Err(e) => {
            error!("Error loading deployments: {}", e);
            notice(format!("Failed to load deployments: {e}"), Tone::Error);
        }
    }
}

async fn deploy(state: &mut AppState, selector: &str) {
    let (repo_name, repo_url) = match state.find_repo(selector) {
        Some(repo) => (repo.name.clone(), repo.clone_url.clone()),
        None => {
            notice(format!("No repository matches {selector:?}"), Tone::Error);
            return;
        }
    };

    let token = state.deploy_ctrl.begin(&repo_name);
    render_progress(&state.deploy_ctrl).print();

    let result = state.http_client.deploy(&repo_url, &repo_name).await;
    state.deploy_ctrl.complete(token, result);
    render_progress(&state.deploy_ctrl).print();
}

async fn delete(
    state: &mut AppState,
    selector: &str,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<(), DashboardError> {
    let name = state.resolve_deployment_name(selector);

    prompt(&format!("Delete deployment \"{name}\"? [y/N] "))?;
    let answer = lines.next_line().await?.unwrap_or_default();
    let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");

    let actions = DeploymentActions::new(&state.http_client);
    match actions.delete(&name, confirmed).await {
        DeleteAction::Cancelled => notice("Cancelled", Tone::Muted),
        DeleteAction::Deleted { message } => {
            notice(
                message.unwrap_or_else(|| "Deployment deleted successfully".to_string()),
                Tone::Success,
            );
            load_deployments(state).await;
        }
        DeleteAction::Failed { error } => {
            notice(
                format!("Failed to delete deployment: {error}"),
                Tone::Error,
            );
        }
    }
    Ok(())
}

fn help() -> Screen {
    let mut screen = Screen::new();
    screen.push_toned("Commands", Tone::Heading);
    screen.push_plain("  repos                 show repositories");
    screen.push_plain("  deployments           show running deployments");
    screen.push_plain("  search <query>        filter repositories (empty query clears)");
    screen.push_plain("  deploy <n|name>       deploy a listed repository");
    screen.push_plain("  details <n|name>      show deployment replica status");
    screen.push_plain("  delete <n|name>       delete a deployment (asks first)");
    screen.push_plain("  refresh               reload the active tab");
    screen.push_plain("  quit                  exit");
    screen
}

fn notice(text: impl Into<String>, tone: Tone) {
    let mut screen = Screen::new();
    screen.push_toned(text, tone);
    screen.print();
}

fn prompt(text: &str) -> Result<(), DashboardError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}
