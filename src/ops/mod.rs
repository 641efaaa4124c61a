// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Batch operations over a whole module collection.
//!
//! Modules are independent, so every evaluation runs across modules in parallel. Each worker
//! scores a private copy of its module's graph; the collection itself is never mutated.

use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;
use serde::Serialize;

use crate::config::ScoringOptions;
use crate::format::{parse_definition, DefinitionError};
use crate::model::{ModuleCollection, ModuleGraph, ModuleId};
use crate::query::{
    coverage, coverage_report, score, AggregationMethod, CoverageError, CoverageReport,
    Observations,
};

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("module {module_id}: {source}")]
    MalformedDefinition { module_id: ModuleId, source: DefinitionError },
}

/// Why one module has no coverage value; reported per module, never fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModuleError {
    #[error(transparent)]
    Definition(DefinitionError),
    #[error(transparent)]
    Coverage(#[from] CoverageError),
}

pub type ModuleOutcome = Result<f64, ModuleError>;

/// A module scored against one dataset, with the path that produced its coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleExplanation {
    pub graph: ModuleGraph,
    /// `None` when the module has no terminal step.
    pub report: Option<CoverageReport>,
}

// Pipeline implementation: collection building and per-module evaluation.
include!("ops_impl.rs");
