// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Modcov CLI entrypoint.
//!
//! `presence` and `abundance` write one coverage value per module (and sample) as TSV;
//! `graph` exports parsed module graphs as JSON. Results go to stdout unless `--output` is
//! given; logs go to stderr (`MODCOV_LOG` or `-v`/`-vv`).

use std::collections::BTreeMap;
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modcov::config::ScoringOptions;
use modcov::model::{ModuleCollection, ModuleId};
use modcov::ops::{build_collection, evaluate_abundance, evaluate_presence, explain_presence};
use modcov::query::suggest::closest;
use modcov::store::{self, StoreError};

const LOG_ENV: &str = "MODCOV_LOG";

#[derive(Debug, Parser)]
#[command(name = "modcov", version, about = "Reaction coverage of pathway modules")]
struct Cli {
    /// JSON file with scoring options (`method`, `threshold`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); `MODCOV_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Definitions {
    /// Module definition table (`module<TAB>definition`)
    #[arg(short, long)]
    definitions: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Coverage of every module for a list of observed identifiers
    Presence {
        #[command(flatten)]
        definitions: Definitions,

        /// Identifier list, one per line
        #[arg(short, long)]
        input: PathBuf,

        /// Scores above this count as covered
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Coverage of every module for each sample of an abundance table
    Abundance {
        #[command(flatten)]
        definitions: Definitions,

        /// Identifier x sample table with a header row
        #[arg(short, long)]
        input: PathBuf,

        /// Subunit aggregation: minimum, mean, sum or bool
        #[arg(short, long)]
        method: Option<String>,

        /// Scores above this count as covered
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Export parsed module graphs as JSON
    Graph {
        #[command(flatten)]
        definitions: Definitions,

        /// Only export this module
        #[arg(long)]
        module: Option<String>,

        /// Score graphs against this identifier list and include the best path
        #[arg(long, value_name = "INPUT")]
        explain: Option<PathBuf>,

        /// Scores above this count as covered (with --explain)
        #[arg(short, long, requires = "explain")]
        threshold: Option<f64>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn load_options(
    config: Option<&Path>,
    method: Option<&str>,
    threshold: Option<f64>,
) -> Result<ScoringOptions, Box<dyn Error>> {
    let options = match config {
        Some(path) => ScoringOptions::load(path)?,
        None => ScoringOptions::default(),
    };
    Ok(options.with_overrides(method, threshold)?)
}

fn load_collection(path: &Path) -> Result<ModuleCollection, Box<dyn Error>> {
    let definitions = store::read_definitions_file(path)?;
    Ok(build_collection(definitions)?)
}

fn write_output(
    output: Option<&Path>,
    write: impl FnOnce(&mut dyn Write, &Path) -> Result<(), StoreError>,
) -> Result<(), StoreError> {
    match output {
        Some(path) => {
            let mut file = io::BufWriter::new(store::create(path)?);
            write(&mut file, path)
        }
        None => write(&mut io::stdout().lock(), Path::new("<stdout>")),
    }
}

/// Resolves `--module`, suggesting a close module id when it does not exist.
fn select_module<'a>(
    collection: &'a ModuleCollection,
    module: &str,
) -> Result<&'a ModuleId, Box<dyn Error>> {
    if let Some((module_id, _)) = collection.graphs().get_key_value(module) {
        return Ok(module_id);
    }
    if let Some(err) = collection.rejected().get(module) {
        return Err(format!("module {module} was rejected: {err}").into());
    }
    let hint = closest(module, collection.module_ids().map(ModuleId::as_str))
        .map(|candidate| format!(" (did you mean {candidate:?}?)"))
        .unwrap_or_default();
    Err(format!("unknown module {module:?}{hint}").into())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Presence { definitions, input, threshold } => {
            let options = load_options(config, None, threshold)?;
            let collection = load_collection(&definitions.definitions)?;
            let observed = store::read_presence_file(&input)?;
            let results = evaluate_presence(&collection, &observed, options.threshold);

            write_output(definitions.output.as_deref(), |out, origin| {
                store::write_presence_results(
                    out,
                    origin,
                    results.iter().map(|(module_id, outcome)| (module_id, outcome.clone().ok())),
                )
            })?;
        }
        Command::Abundance { definitions, input, method, threshold } => {
            let options = load_options(config, method.as_deref(), threshold)?;
            let collection = load_collection(&definitions.definitions)?;
            let table = store::read_abundance_file(&input)?;
            let results = evaluate_abundance(&collection, table.columns(), options);

            write_output(definitions.output.as_deref(), |out, origin| {
                store::write_abundance_results(
                    out,
                    origin,
                    table.samples(),
                    results.iter().map(|(module_id, outcomes)| {
                        (module_id, outcomes.iter().map(|outcome| outcome.clone().ok()).collect())
                    }),
                )
            })?;
        }
        Command::Graph { definitions, module, explain, threshold } => {
            let collection = load_collection(&definitions.definitions)?;
            let selected = module.as_deref().map(|module| select_module(&collection, module));
            let selected = selected.transpose()?;
            let keep = |module_id: &ModuleId| selected.map_or(true, |wanted| wanted == module_id);

            match explain {
                Some(input) => {
                    let options = load_options(config, None, threshold)?;
                    let observed = store::read_presence_file(&input)?;
                    let mut explained = explain_presence(&collection, &observed, options.threshold);
                    explained.retain(|module_id, _| keep(module_id));
                    write_output(definitions.output.as_deref(), |out, origin| {
                        store::write_json(out, origin, &explained)
                    })?;
                }
                None => {
                    let graphs: BTreeMap<_, _> = collection
                        .graphs()
                        .iter()
                        .filter(|&(module_id, _)| keep(module_id))
                        .collect();
                    write_output(definitions.output.as_deref(), |out, origin| {
                        store::write_json(out, origin, &graphs)
                    })?;
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = (|| -> Result<(), Box<dyn Error>> { run(cli) })();

    if let Err(err) = result {
        eprintln!("modcov: {err}");
        std::process::exit(1);
    }
}
