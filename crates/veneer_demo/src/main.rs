//! Veneer demo CLI
//!
//! Render the simple form page to its wire form, or replay a scripted client
//! session against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veneer_demo::{registry, SimpleForm, ROUTE};
use veneer_runtime::{SimulatedClient, TracingSink};

#[derive(Parser)]
#[command(name = "veneer-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Veneer simple form demo", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page's wire form as JSON
    Render,
    /// Replay a scripted session: edit each field, then submit
    Replay,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Render => cmd_render(),
        Commands::Replay => cmd_replay(),
    }
}

fn cmd_render() -> Result<()> {
    let json = registry().render_json(ROUTE)?;
    println!("{json}");
    Ok(())
}

fn cmd_replay() -> Result<()> {
    let sink = TracingSink;
    let mut client = SimulatedClient::load(&SimpleForm, &sink)?;

    for (field, value) in [
        ("tbUserId", "alice"),
        ("tbUserDisplayName", "Alice A."),
        ("tbUserPassword", "hunter2"),
    ] {
        let updates = client.edit(field, value)?;
        for update in &updates {
            info!(locator = %update.locator, fields = ?update.fields, "applied update");
        }
    }

    for id in ["lbUserId", "lbUserDisplayName", "lbUserPassword"] {
        info!(label = id, text = client.label_text(id).unwrap_or(""), "final label state");
    }

    client.click("btnSend")?;
    Ok(())
}
