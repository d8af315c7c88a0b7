//! Shipdeck Dashboard - Entry Point
//!
//! Terminal client for the shipdeck deploy service: lists repositories,
//! triggers deployments, and manages the resulting running deployments.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use shipdeck::app::options::AppOptions;
use shipdeck::app::run::run;
use shipdeck::logs::{init_logging, LogOptions};
use shipdeck::settings::Settings;
use shipdeck::utils::version_info;

use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    let version = version_info();
    if cli_args.contains_key("version") {
        match serde_json::to_string_pretty(&version) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => eprintln!("Failed to render version info: {e}"),
        }
        return;
    }

    // Retrieve the settings file
    let settings_path = cli_args
        .get("settings")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("shipdeck.json"));
    let settings = match Settings::load(&settings_path).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file: {e}");
            return;
        }
    };

    // Initialize logging
    let log_options = LogOptions {
        log_level: settings.log_level.clone(),
        json_format: settings.log_json,
    };
    if let Err(e) = init_logging(log_options) {
        println!("Failed to initialize logging: {e}");
    }

    // Assemble options: CLI flags override the settings file
    let mut options = AppOptions {
        backend_base_url: cli_args
            .get("backend")
            .cloned()
            .unwrap_or(settings.backend.base_url),
        ..Default::default()
    };
    let initial_tab = cli_args.get("tab").unwrap_or(&settings.initial_tab);
    match initial_tab.parse() {
        Ok(tab) => options.initial_tab = tab,
        Err(e) => warn!("{}, starting on repositories", e),
    }

    info!("Running shipdeck dashboard with options: {:?}", options);
    let result = run(version.version, options, await_shutdown_signal()).await;
    if let Err(e) = result {
        error!("Failed to run the dashboard: {e}");
    }
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Ctrl+C received, shutting down...");
    }
}
