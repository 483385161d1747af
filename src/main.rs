#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use dof3a_core::FeedConfig;

/// Global feed config, set from command line
static FEED_CONFIG: OnceLock<FeedConfig> = OnceLock::new();

/// Get the feed config (set from command line or the built-in feed)
pub fn get_feed_config() -> FeedConfig {
    FEED_CONFIG.get().cloned().unwrap_or_default()
}

/// Dof3a - social feed desktop app
#[derive(Parser, Debug)]
#[command(name = "dof3a-desktop")]
#[command(about = "Dof3a - social feed with reactions and comments")]
struct Args {
    /// Feed config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewer name, overriding the config
    #[arg(long)]
    viewer: Option<String>,

    /// Reaction menu close delay in milliseconds, overriding the config
    #[arg(long)]
    grace_ms: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dof3a_core::logging::init(args.verbose);

    let mut config = match args.config {
        Some(ref path) => FeedConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FeedConfig::default(),
    };
    if let Some(viewer) = args.viewer {
        config.viewer = viewer;
    }
    if let Some(grace_ms) = args.grace_ms {
        config.menu_close_grace_ms = grace_ms;
    }
    config.validate()?;

    tracing::info!(
        viewer = %config.viewer,
        posts = config.posts.len(),
        "Starting Dof3a"
    );

    let _ = FEED_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Dof3a")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
