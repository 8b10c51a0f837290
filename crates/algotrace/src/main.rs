// AlgoTrace - Instrumented Algorithm Catalog
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! AlgoTrace - Instrumented Algorithm Catalog
//!
//! Runs classic algorithms and prints the step-by-step trace of how they
//! reach their answer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing::Level;

mod cmd;
mod config;

use config::{Config, OutputFormat};

/// Command-line interface for AlgoTrace
#[derive(Debug, Parser)]
#[command(name = "algotrace")]
#[command(about = "AlgoTrace - Step-by-step execution traces of classic algorithms")]
#[command(version)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "ALGOTRACE_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: Level,

    /// Also write logs to a daily rolling file in the temp directory
    #[arg(long, env = "ALGOTRACE_LOG_FILE", global = true)]
    pub log_file: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the catalog, grouped by category
    List {
        /// Only show this category (e.g. `graphs`)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show an algorithm's metadata, default input and reference listing
    Show {
        /// Algorithm id (e.g. `two-sum`)
        id: String,
    },
    /// Run an algorithm and print its trace
    Run {
        /// Algorithm id (e.g. `two-sum`)
        id: String,

        /// Input as inline JSON (default: the algorithm's canonical input)
        #[arg(long, conflicts_with = "input_file")]
        input: Option<String>,

        /// Read the input JSON from a file
        #[arg(long)]
        input_file: Option<PathBuf>,

        /// Output format (default: from the config file)
        #[arg(long, value_enum, env = "ALGOTRACE_FORMAT")]
        format: Option<OutputFormat>,

        /// Fail instead of warning when the trace breaks an invariant
        #[arg(long)]
        strict: bool,
    },
    /// Run every algorithm on its default input and validate the traces
    Check,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    let (config, source) = Config::load()?;

    algotrace_utils::logging::init_logging(
        "algotrace",
        cli.log_level,
        cli.log_file || config.logging.file,
    )?;
    source.report();

    match cli.command {
        Commands::List { category } => cmd::list_algorithms(category.as_deref()),
        Commands::Show { id } => cmd::show_algorithm(&id),
        Commands::Run { id, input, input_file, format, strict } => {
            let input = cmd::read_input(input, input_file)?;
            let format = format.unwrap_or(config.output.format);
            cmd::run_algorithm(&id, input, format, strict, &config)
        }
        Commands::Check => cmd::check_catalog(),
    }
}
