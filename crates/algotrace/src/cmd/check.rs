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

//! Check command - validate the default trace of every algorithm

use algotrace_engine::{registry, Engine, EngineConfig};
use eyre::Result;
use tracing::{debug, error};

/// Run every algorithm on its default input and validate the trace
pub fn check_catalog() -> Result<()> {
    let engine = Engine::new(EngineConfig::default().with_validate(false));
    let mut failures = 0;

    for descriptor in registry().list() {
        let trace = engine.run(descriptor.id, None)?;
        let violations = engine.validate(descriptor.id, &trace)?;
        if violations.is_empty() {
            debug!(id = descriptor.id, steps = trace.len(), "Trace is valid");
            println!("\x1b[32m✓\x1b[0m {:<28} {:>5} steps", descriptor.id, trace.len());
            continue;
        }

        failures += 1;
        println!("\x1b[31m✗\x1b[0m {:<28} {} violation(s)", descriptor.id, violations.len());
        for violation in &violations {
            error!(id = descriptor.id, %violation, "Invalid trace");
            println!("    {violation}");
        }
    }

    if failures > 0 {
        eyre::bail!("{failures} algorithm(s) produced invalid traces");
    }
    println!("All {} algorithms produced valid traces", registry().len());
    Ok(())
}
