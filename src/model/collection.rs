// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::graph::ModuleGraph;
use super::ids::ModuleId;
use crate::format::definition::DefinitionError;

/// Every module of one definition table, keyed by module id.
///
/// Modules whose definitions were structurally invalid are kept in `rejected` so that batch
/// output can still report them.
#[derive(Debug, Clone, Default)]
pub struct ModuleCollection {
    graphs: BTreeMap<ModuleId, ModuleGraph>,
    rejected: BTreeMap<ModuleId, DefinitionError>,
}

impl ModuleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module_id: ModuleId, graph: ModuleGraph) -> Option<ModuleGraph> {
        self.rejected.remove(&module_id);
        self.graphs.insert(module_id, graph)
    }

    pub fn reject(&mut self, module_id: ModuleId, error: DefinitionError) {
        self.graphs.remove(&module_id);
        self.rejected.insert(module_id, error);
    }

    pub fn graphs(&self) -> &BTreeMap<ModuleId, ModuleGraph> {
        &self.graphs
    }

    pub fn get(&self, module_id: &str) -> Option<&ModuleGraph> {
        self.graphs.get(module_id)
    }

    pub fn rejected(&self) -> &BTreeMap<ModuleId, DefinitionError> {
        &self.rejected
    }

    /// All module ids, accepted and rejected, in sorted order.
    pub fn module_ids(&self) -> impl Iterator<Item = &ModuleId> {
        let mut ids: Vec<&ModuleId> = self.graphs.keys().chain(self.rejected.keys()).collect();
        ids.sort();
        ids.into_iter()
    }

    pub fn len(&self) -> usize {
        self.graphs.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty() && self.rejected.is_empty()
    }
}
