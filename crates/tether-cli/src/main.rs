//! tether - command-line driver for the attention engine.
//!
//! Reads JSON from a file or stdin and prints the engine's JSON output on
//! stdout. Logs go to stderr; set `RUST_LOG` to adjust verbosity.
//!
//! # Usage
//!
//! ```bash
//! echo '{"continuous_scroll_sec": 200}' | tether evaluate
//! tether render --category hard_interrupt --history reactions.json
//! tether --config tether.toml nudge session.json
//! tether weights --history reactions.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tether_core::policy::ArmTable;
use tether_core::{
    AttentionEngine, Category, EngineConfig, InMemoryMessageSlot, InMemoryReactionLog,
    NudgeContext, PersonalizedMessage, RawTelemetry, ReactionRecord, Strategy,
};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine config file (.toml, .json or .yaml); defaults to TETHER_* environment variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn raw telemetry into signals and a gate decision
    Evaluate {
        /// Telemetry JSON file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Render the payload for a strategy category
    Render {
        /// Category label, e.g. hard_interrupt or micro_closure
        #[arg(long)]
        category: String,

        /// Strategy intent label
        #[arg(long)]
        intent: Option<String>,

        /// Presence intensity (low, medium, high)
        #[arg(long)]
        intensity: Option<String>,

        /// Reaction history JSON file
        #[arg(long)]
        history: Option<PathBuf>,

        /// Personalized message to place in the slot before rendering
        #[arg(long)]
        message: Option<String>,
    },
    /// Compose a chat nudge from telemetry and session context
    Nudge {
        /// JSON file with `telemetry` and `context` objects; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Show per-mode weights learned from a reaction history
    Weights {
        /// Reaction history JSON file
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

type Engine = AttentionEngine<InMemoryMessageSlot, InMemoryReactionLog>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // stdout carries JSON, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Evaluate { file } => {
            let raw = RawTelemetry::from_value(&read_json(file.as_deref())?);
            let engine = build_engine(config, None, Vec::new())?;
            print_json(&engine.evaluate(&raw))
        }
        Command::Render {
            category,
            intent,
            intensity,
            history,
            message,
        } => {
            let history = read_history(history.as_deref())?;
            let engine = build_engine(config, message.map(PersonalizedMessage::new), history)?;

            let strategy = Strategy::from_labels(intent.as_deref(), intensity.as_deref());
            let category = Category::from_label(&category);
            if category.is_none() {
                info!("No renderable category, emitting none payload");
            }
            print_json(&engine.render(category, Some(&strategy)).await)
        }
        Command::Nudge { file } => {
            let input = read_json(file.as_deref())?;
            let telemetry = input.get("telemetry").unwrap_or(&input);
            let context = input
                .get("context")
                .map(NudgeContext::from_value)
                .unwrap_or_default();

            let engine = build_engine(config, None, Vec::new())?;
            let evaluation = engine.evaluate(&RawTelemetry::from_value(telemetry));
            print_json(&engine.compose_nudge(&evaluation.signals, &context))
        }
        Command::Weights { history } => {
            let history = read_history(history.as_deref())?;
            let table = ArmTable::from_history(&history);
            let weights: Vec<Value> = table
                .ranked(&config.policy)
                .into_iter()
                .map(|(mode, weight)| {
                    let stats = table.get(mode);
                    json!({
                        "mode": mode,
                        "weight": weight,
                        "completed": stats.completed,
                        "ignored": stats.ignored,
                        "snoozed": stats.snoozed,
                    })
                })
                .collect();
            print_json(&json!({ "records": history.len(), "weights": weights }))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let config = EngineConfig::from_env();
            config.validate().context("Invalid TETHER_* environment configuration")?;
            config
        }
    };
    debug!(?config, "Loaded configuration");
    Ok(config)
}

fn build_engine(
    config: EngineConfig,
    message: Option<PersonalizedMessage>,
    history: Vec<ReactionRecord>,
) -> Result<Engine> {
    let slot = match message {
        Some(message) => InMemoryMessageSlot::with_message(message),
        None => InMemoryMessageSlot::new(),
    };
    let log = InMemoryReactionLog::with_records(history);
    Ok(AttentionEngine::new(config, Arc::new(slot), Arc::new(log))?)
}

fn read_json(path: Option<&Path>) -> Result<Value> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Input is not valid JSON")
}

fn read_history(path: Option<&Path>) -> Result<Vec<ReactionRecord>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let history = ReactionRecord::parse_history(&read_json(Some(path))?);
    debug!(records = history.len(), "Loaded reaction history");
    Ok(history)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
