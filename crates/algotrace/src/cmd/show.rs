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

//! Show command - metadata, default input and numbered listing of one algorithm

use algotrace_engine::registry;
use eyre::Result;

/// Print everything the catalog knows about `id`
pub fn show_algorithm(id: &str) -> Result<()> {
    let descriptor =
        registry().get(id).ok_or_else(|| eyre::eyre!("Unknown algorithm '{id}'"))?;

    println!("{} ({})", descriptor.name, descriptor.id);
    println!("  Category:   {}", descriptor.category);
    println!("  Difficulty: {}", descriptor.difficulty);
    println!("  Time:       {}", descriptor.time_complexity);
    println!("  Space:      {}", descriptor.space_complexity);
    println!();
    println!("Default input:");
    println!("{}", serde_json::to_string_pretty(&descriptor.default_input())?);
    println!();
    println!("Reference listing:");
    for (number, line) in descriptor.listing.lines().enumerate() {
        println!("{:>4} | {line}", number + 1);
    }
    Ok(())
}
