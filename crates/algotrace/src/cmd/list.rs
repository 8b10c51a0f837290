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

//! List command - print the catalog grouped by category

use algotrace_engine::{registry, Category};
use eyre::Result;

/// Print every algorithm, or only those of one category
pub fn list_algorithms(category: Option<&str>) -> Result<()> {
    let filter = category
        .map(|slug| {
            Category::from_slug(slug).ok_or_else(|| {
                let known: Vec<&str> = Category::ALL.iter().map(Category::slug).collect();
                eyre::eyre!("Unknown category '{slug}', expected one of: {}", known.join(", "))
            })
        })
        .transpose()?;

    for (category, descriptors) in registry().by_category() {
        if filter.is_some_and(|wanted| wanted != category) {
            continue;
        }
        println!("{category} ({})", category.slug());
        for descriptor in descriptors {
            println!(
                "  {:<28} {:<32} {:<6} {}",
                descriptor.id, descriptor.name, descriptor.difficulty, descriptor.time_complexity
            );
        }
    }
    Ok(())
}
