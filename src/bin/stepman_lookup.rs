//! Command-line front end for step collection lookups.
//!
//! Lists routed collections, prints resolved spec paths, summarizes a
//! collection, or prints one step version as JSON. Errors print their full
//! cause chain and exit with status 1.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stepspec::{DEFAULT_STEPMAN_ROOT, StepLibrary, StepmanConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stepman-lookup")]
#[command(about = "Look up step collections and step versions", long_about = None)]
struct Cli {
    /// Stepman data directory holding routing.json and step_collections/.
    #[arg(long, env = "STEPMAN_ROOT", default_value = DEFAULT_STEPMAN_ROOT, global = true)]
    stepman_root: PathBuf,

    /// Read routing from this file instead of <stepman-root>/routing.json.
    #[arg(long, global = true)]
    routing_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routed collection ids and their directory tokens.
    Collections,

    /// Print the absolute spec.json path of a collection.
    SpecPath { collection: String },

    /// Summarize a collection's steps and latest versions.
    Collection {
        collection: String,

        /// Print the decoded collection as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print one step version as JSON (latest unless --version is given).
    Step {
        collection: String,
        step: String,

        #[arg(long)]
        version: Option<String>,
    },
}

impl Cli {
    fn config(&self) -> StepmanConfig {
        let config = StepmanConfig::new(&self.stepman_root);
        match &self.routing_file {
            Some(path) => config.with_routing_file(path),
            None => config,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let library = StepLibrary::new(cli.config());

    match cli.cmd {
        Commands::Collections => {
            let table = library.routing_table().context("Failed to load routing")?;
            for (id, token) in table.iter() {
                println!("{id}\t{token}");
            }
        }
        Commands::SpecPath { collection } => {
            let path = library
                .spec_path(&collection)
                .context("Failed to get spec json path")?;
            println!("{}", path.display());
        }
        Commands::Collection { collection, json } => {
            let model = library
                .read_collection(&collection)
                .with_context(|| format!("Failed to read collection {collection}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                println!("{}", summary_header(&collection, &model));
                for step_id in model.step_ids() {
                    let latest = model
                        .step(step_id)
                        .map(|group| group.latest_version_number.as_str())
                        .unwrap_or_default();
                    println!("{step_id}\t{latest}");
                }
            }
        }
        Commands::Step {
            collection,
            step,
            version,
        } => {
            let resolved = library
                .read_step_version(&collection, &step, version.as_deref())
                .with_context(|| format!("Failed to read step {step} from {collection}"))?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }

    Ok(())
}

fn summary_header(collection: &str, model: &stepspec::StepCollectionModel) -> String {
    let mut header = format!("# {collection}: {} steps", model.steps.len());
    if !model.format_version.is_empty() {
        header.push_str(&format!(" (format {})", model.format_version));
    }
    header
}
