use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use periodic_helix::io::logger;
use periodic_helix::synthesis::compound::tabulated_torque;
use periodic_helix::{combine, report, ElementRecord, ModelConfig, Registry, MAX_SELECTION};

#[derive(Parser)]
#[command(author, version, about = "Periodic table as a twisted helical ribbon")]
struct Cli {
    /// JSON model configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embedded 3D coordinates. Accepts symbols or atomic numbers; all
    /// elements when none is given.
    Embed { symbols: Vec<String> },

    /// Predicted ionization energy and spinor phase, by symbol or atomic number.
    Energy {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Compound prediction for one to four distinct elements.
    Combine {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Predicted against observed energy for every registered element.
    Table,
}

fn resolve_or_all(symbols: &[String]) -> Result<Vec<&'static ElementRecord>> {
    if symbols.is_empty() {
        return Ok(Registry::all().iter().collect());
    }
    symbols
        .iter()
        .map(|s| Registry::find(s).map_err(anyhow::Error::from))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();

    logger::init(logger::level_from_verbosity(cli.verbose))
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    let config = match &cli.config {
        Some(path) => ModelConfig::from_path(path)
            .with_context(|| format!("loading config {:?}", path))?,
        None => ModelConfig::default(),
    };
    let models = config.build();

    match cli.command {
        Commands::Embed { symbols } => {
            let elements = resolve_or_all(&symbols)?;
            if cli.json {
                let rows: Vec<_> = elements
                    .iter()
                    .map(|e| (e.symbol, models.embedding.embed_element(e)))
                    .collect();
                println!("{}", report::to_json(&rows)?);
            } else {
                print!("{}", report::embedding_table(&elements, models.embedding.as_ref()));
            }
        }
        Commands::Energy { symbols } => {
            let elements = resolve_or_all(&symbols)?;
            if cli.json {
                let rows: Vec<_> = elements
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "symbol": e.symbol,
                            "observed": e.a,
                            "predicted": models.energy.predict_element(e),
                            "model": models.energy.name(),
                            "phase": periodic_helix::spinor_phase(e.z),
                        })
                    })
                    .collect();
                println!("{}", report::to_json(&rows)?);
            } else {
                for e in elements {
                    println!("{}\n", report::tooltip(e, models.energy.as_ref()));
                }
            }
        }
        Commands::Combine { symbols } => {
            if symbols.len() > MAX_SELECTION {
                anyhow::bail!("at most {} elements can be combined, got {}", MAX_SELECTION, symbols.len());
            }
            let (prediction, text) = combine(&symbols, &config)?;
            if cli.json {
                println!("{}", report::to_json(&prediction)?);
            } else {
                println!("{}", text);
            }
        }
        Commands::Table => {
            let elements: Vec<_> = Registry::all().iter().collect();
            if cli.json {
                let rows: Vec<_> = elements
                    .iter()
                    .map(|e| {
                        let predicted = models.energy.predict_element(e);
                        serde_json::json!({
                            "symbol": e.symbol,
                            "z": e.z,
                            "observed": e.a,
                            "predicted": predicted,
                            "residual": e.a - predicted,
                            "torque": tabulated_torque(e),
                        })
                    })
                    .collect();
                println!("{}", report::to_json(&rows)?);
            } else {
                print!("{}", report::energy_table(&elements, models.energy.as_ref()));
            }
        }
    }

    log::info!("Done in {:.2?}", start_time.elapsed());
    Ok(())
}
