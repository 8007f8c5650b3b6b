//! # spimdata-tool
//!
//! A command-line tool for inspecting and editing SpimData XML datasets.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a dataset
//! spimdata-tool inspect dataset.xml
//!
//! # Drop display settings from every view setup
//! spimdata-tool strip dataset.xml displaysettings
//!
//! # Append a uniform scaling to every registration
//! spimdata-tool transform dataset.xml --name downsample uniform 0.5
//!
//! # Build datasets from source images described in TOML
//! spimdata-tool import sources.toml out/
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
