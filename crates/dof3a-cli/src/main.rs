//! Dof3a Feed CLI
//!
//! Headless access to the feed and its post cards.
//!
//! ## Usage
//!
//! ```bash
//! # List the posts in the feed
//! dof3a feed
//!
//! # Same, from a config file
//! dof3a --config feed.json feed
//!
//! # Replay an event script against the first post and print the final view
//! dof3a replay script.jsonl
//!
//! # Replay against the third post as another viewer, with a slower menu
//! dof3a replay script.jsonl --post 2 --viewer "Omar Ashraf" --grace-ms 300
//! ```
//!
//! ## Script format
//!
//! One JSON object per line. Either a card event or a pause:
//!
//! ```text
//! {"event": "menu_pointer_entered"}
//! {"event": "reaction_selected", "kind": "love"}
//! {"wait_ms": 200}
//! {"event": "comment_draft_changed", "text": "nice post"}
//! {"event": "comment_submitted"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dof3a_core::{CardEvent, CardSession, CardView, Feed, FeedConfig};
use serde::Deserialize;

/// Dof3a - social feed post cards
#[derive(Parser)]
#[command(name = "dof3a")]
#[command(version = "0.1.0")]
#[command(about = "Dof3a - inspect the feed and replay post card interactions")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Feed config file (JSON); the built-in feed is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the posts in the feed
    Feed,

    /// Replay a script of card events and print the resulting view
    Replay {
        /// JSON-lines script of events and pauses
        script: PathBuf,

        /// Index of the post to drive (0 = first)
        #[arg(short, long, default_value_t = 0)]
        post: usize,

        /// Viewer name, overriding the config
        #[arg(long)]
        viewer: Option<String>,

        /// Reaction menu close delay in milliseconds, overriding the config
        #[arg(long)]
        grace_ms: Option<u64>,

        /// Print a short text summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
}

/// One line of a replay script.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptStep {
    Wait { wait_ms: u64 },
    Event(CardEvent),
}

fn load_config(path: Option<&Path>) -> Result<FeedConfig> {
    match path {
        Some(path) => FeedConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(FeedConfig::default()),
    }
}

fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step: ScriptStep = serde_json::from_str(line)
            .with_context(|| format!("Invalid script step on line {}: {}", i + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}

fn print_summary(view: &CardView) {
    let state = |open: bool| if open { "open" } else { "closed" };

    println!("Post: {} ({})", view.post.poster_name, view.posted_label);
    println!("Viewer: {}", view.viewer);
    match view.viewer_reaction {
        Some(kind) => println!("Your reaction: {}", kind),
        None => println!("Your reaction: none"),
    }
    println!("Reacts: {}", view.total_reactions);
    for entry in &view.rosters {
        if entry.count() > 0 {
            println!("  {} {}: {}", entry.kind, entry.count(), entry.names());
        }
    }
    println!("Comments: {}", view.comment_count());
    for comment in &view.comments {
        println!("  {}: {}", comment.author, comment.text);
    }
    println!(
        "Panels: reacts={} comments={} menu={}",
        state(view.reaction_popup_open),
        state(view.comment_panel_open),
        state(view.reaction_menu_open),
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dof3a_core::logging::init(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Feed => {
            let feed = Feed::from_config(&config);
            let now = chrono::Utc::now();

            if feed.is_empty() {
                println!("No posts in the feed.");
            } else {
                println!("Feed for {} ({} posts):", feed.viewer(), feed.len());
                for card in feed.cards() {
                    let view = card.view(now);
                    println!();
                    println!("  {} - {}", view.post.poster_name, view.posted_label);
                    println!("    {}", view.post.content);
                    if let Some(ref image) = view.post.post_image {
                        println!("    [image: {}]", image);
                    }
                }
            }
        }

        Commands::Replay {
            script,
            post,
            viewer,
            grace_ms,
            summary,
        } => {
            if let Some(viewer) = viewer {
                config.viewer = viewer;
            }
            if let Some(grace_ms) = grace_ms {
                config.menu_close_grace_ms = grace_ms;
            }
            config.validate()?;

            let source = std::fs::read_to_string(&script)
                .with_context(|| format!("Failed to read script {}", script.display()))?;
            let steps = parse_script(&source)?;

            let feed = Feed::from_config(&config);
            let card_config = feed.card_config();
            let post_count = feed.len();
            let card = feed
                .into_cards()
                .into_iter()
                .nth(post)
                .with_context(|| format!("Post index {} out of range ({} posts)", post, post_count))?;

            let session = CardSession::new(card, card_config);
            tracing::info!(steps = steps.len(), post, "Replaying script");

            for step in steps {
                match step {
                    ScriptStep::Wait { wait_ms } => {
                        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
                    }
                    ScriptStep::Event(event) => {
                        session.dispatch(event);
                    }
                }
            }

            let view = session.view();
            if summary {
                print_summary(&view);
            } else {
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
        }
    }

    Ok(())
}
