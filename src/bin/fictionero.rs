#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fictionero::config::{load_config_from_path, seed_from_env, ExperimentConfig};
use fictionero::labels::{assign_cue_colors, DEFAULT_CUE_COLORS};
use fictionero::{Instrument, Session};

#[derive(Parser)]
#[command(name = "fictionero", version, about = "FictionEro experiment content CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign cue colors to conditions and print the mapping as JSON
    Labels {
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated candidate colors
        #[arg(long, value_delimiter = ',')]
        candidates: Option<Vec<String>>,
    },
    /// List available questionnaire instruments
    Instruments,
    /// Compile one questionnaire screen to JSON
    Compile {
        #[arg(long, value_enum)]
        instrument: CliInstrument,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build a full session bundle (cues, instructions, questionnaires)
    Session {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliInstrument {
    Bait,
    BaitExtended,
    Cops,
    CopsExtended,
}

impl CliInstrument {
    fn into_instrument(self) -> Instrument {
        match self {
            CliInstrument::Bait => Instrument::Bait,
            CliInstrument::BaitExtended => Instrument::BaitExtended,
            CliInstrument::Cops => Instrument::Cops,
            CliInstrument::CopsExtended => Instrument::CopsExtended,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fictionero=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Labels { seed, candidates } => {
            let candidates = candidates.unwrap_or_else(|| {
                DEFAULT_CUE_COLORS.iter().map(|c| c.to_string()).collect()
            });
            let seed = match seed {
                Some(seed) => Some(seed),
                None => seed_from_env()?,
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let cues = assign_cue_colors(&candidates, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&cues)?);
        }
        Commands::Instruments => {
            for instrument in Instrument::ALL {
                println!(
                    "{}\t{} items\t{}",
                    instrument.slug(),
                    instrument.item_count(),
                    instrument.screen_name()
                );
            }
        }
        Commands::Compile {
            instrument,
            config,
            out,
        } => {
            let config = read_config(config)?;
            let screen = instrument
                .into_instrument()
                .screen(&config.analog, config.slider_width)?;
            match out {
                Some(path) => write_json(&path, &screen)?,
                None => println!("{}", serde_json::to_string_pretty(&screen)?),
            }
        }
        Commands::Session { config, seed, out } => {
            let config = read_config(config)?;
            let seed = match seed {
                Some(seed) => Some(seed),
                None => config.effective_seed()?,
            };
            let session = Session::start_with_seed(config, seed)?;
            let bundle = session.bundle()?;
            write_json(&out, &bundle)?;
            println!("{}", bundle.content_hash);
        }
    }

    Ok(())
}

fn read_config(path: Option<PathBuf>) -> Result<ExperimentConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(ExperimentConfig::default()),
    }
}

fn write_json<T: serde::Serialize>(path: &PathBuf, value: &T) -> Result<(), io::Error> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    std::fs::write(path, json)
}
