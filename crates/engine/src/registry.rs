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

//! The algorithm catalog.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::{algorithms, AlgorithmDescriptor, Category};

/// Errors raised while assembling a registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share an id
    #[error("duplicate algorithm id `{0}`")]
    DuplicateId(String),
}

/// Lookup table of algorithm descriptors, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: Vec<AlgorithmDescriptor>,
    index: BTreeMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry, rejecting duplicate ids
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = AlgorithmDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            if registry.index.contains_key(descriptor.id) {
                return Err(RegistryError::DuplicateId(descriptor.id.to_string()));
            }
            registry.index.insert(descriptor.id, registry.descriptors.len());
            registry.descriptors.push(descriptor);
        }
        debug!(count = registry.descriptors.len(), "Registry assembled");
        Ok(registry)
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.index.get(id).map(|position| &self.descriptors[*position])
    }

    /// All descriptors in catalog order
    pub fn list(&self) -> &[AlgorithmDescriptor] {
        &self.descriptors
    }

    /// Descriptors grouped by category, categories in catalog order
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&AlgorithmDescriptor>> {
        let mut groups: BTreeMap<Category, Vec<&AlgorithmDescriptor>> = BTreeMap::new();
        for descriptor in &self.descriptors {
            groups.entry(descriptor.category).or_default().push(descriptor);
        }
        groups
    }

    /// Descriptors of a single category
    pub fn in_category(&self, category: Category) -> Vec<&AlgorithmDescriptor> {
        self.descriptors.iter().filter(|descriptor| descriptor.category == category).collect()
    }

    /// Number of registered algorithms
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::from_descriptors(algorithms::catalog())
        .expect("built-in catalog ids are unique")
});

/// The built-in catalog
pub fn registry() -> &'static Registry {
    &REGISTRY
}
