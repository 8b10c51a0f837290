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

//! Run command - execute one algorithm and print its trace

use std::{fs, path::PathBuf};

use algotrace_common::Trace;
use algotrace_engine::{Engine, EngineConfig};
use eyre::{Context, Result};
use tracing::info;

use crate::config::{Config, OutputFormat};

/// Resolve the input from `--input` or `--input-file`; `None` means the default input
pub fn read_input(
    inline: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<serde_json::Value>> {
    let raw = match (inline, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {path:?}"))?,
        (None, None) => return Ok(None),
    };
    let value = serde_json::from_str(&raw).with_context(|| "Input is not valid JSON")?;
    Ok(Some(value))
}

/// Run `id` and print its trace in `format`
pub fn run_algorithm(
    id: &str,
    input: Option<serde_json::Value>,
    format: OutputFormat,
    strict: bool,
    config: &Config,
) -> Result<()> {
    info!("Running {} with {} input", id, if input.is_some() { "custom" } else { "default" });

    let engine = Engine::new(EngineConfig::default().with_strict(strict));
    let trace =
        engine.run(id, input).with_context(|| format!("Failed to run algorithm '{id}'"))?;

    print_trace(&trace, format, config.output.pretty_json)
}

fn print_trace(trace: &Trace, format: OutputFormat, pretty_json: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty_json {
                serde_json::to_string_pretty(trace)?
            } else {
                serde_json::to_string(trace)?
            };
            println!("{rendered}");
        }
        OutputFormat::Pretty => {
            for (index, step) in trace.iter().enumerate() {
                println!("{index:>5}  {step}");
            }
            if let Some(result) = trace.result() {
                println!("result: {result}");
            }
        }
        OutputFormat::Summary => trace.print_summary(),
    }
    Ok(())
}
