use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod import;
mod inspect;
mod strip;
mod transform;

pub use config::Config;

/// spimdata - Inspect and edit multi-view microscopy metadata
#[derive(Parser)]
#[command(name = "spimdata-tool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a dataset
    Inspect {
        /// Dataset XML file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove attributes from every view setup
    Strip {
        /// Dataset XML file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Attribute names or tags to remove (e.g. displaysettings)
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Append a transform to every registration
    Transform {
        /// Dataset XML file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Name recorded for the transform
        #[arg(short, long, default_value = "manual")]
        name: String,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(subcommand)]
        op: TransformOp,
    },

    /// Build datasets from source images described in a TOML file
    Import {
        /// TOML file with one [[image]] table per source image
        #[arg(value_name = "SOURCES")]
        sources: PathBuf,

        /// Directory receiving one <title>.xml per image
        #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
    },
}

/// Transform appended by the `transform` command
#[derive(Subcommand, Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Scale along x, y and z
    #[command(allow_negative_numbers = true)]
    Scale {
        /// Factor along x
        x: f64,
        /// Factor along y
        y: f64,
        /// Factor along z
        z: f64,
    },

    /// Scale by the same factor along all axes
    #[command(allow_negative_numbers = true)]
    Uniform {
        /// Factor
        factor: f64,
    },

    /// Translate along x, y and z
    #[command(allow_negative_numbers = true)]
    Translate {
        /// Offset along x
        x: f64,
        /// Offset along y
        y: f64,
        /// Offset along z
        z: f64,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Inspect { file, json } => inspect::run(&config, file, json),
        Commands::Strip {
            input,
            names,
            output,
        } => strip::run(&config, input, names, output),
        Commands::Transform {
            input,
            name,
            output,
            op,
        } => transform::run(&config, input, name, op, output),
        Commands::Import {
            sources,
            output_dir,
        } => import::run(&config, sources, output_dir),
    }
}
