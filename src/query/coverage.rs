// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reaction coverage: the best fraction of satisfied steps along any root-to-terminal path.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ModuleGraph, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoverageError {
    #[error("module has no terminal steps")]
    EmptyModule,
}

/// The winning path of a coverage evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub coverage: f64,
    /// Node ids from a root step to a terminal step.
    pub path: Vec<NodeId>,
    /// Number of steps on `path` whose score exceeds the threshold.
    pub covered: usize,
}

#[derive(Debug, Clone, Copy)]
struct Best {
    covered: usize,
    via: Option<NodeId>,
}

/// Per node: path length (in nodes) -> most covered steps among paths of that length ending
/// at the node.
type Table = Vec<BTreeMap<usize, Best>>;

fn build_table(graph: &ModuleGraph, threshold: f64) -> Table {
    let mut table: Table = Vec::with_capacity(graph.len());
    for node in graph.nodes() {
        let hit = usize::from(node.score() > threshold);
        let mut lengths = BTreeMap::new();
        if node.is_root() {
            lengths.insert(1, Best { covered: hit, via: None });
        }
        for &predecessor in node.source() {
            // Predecessors precede their successors in the arena.
            let Some(previous) = table.get(predecessor.index()) else {
                continue;
            };
            for (&len, best) in previous {
                let candidate = Best { covered: best.covered + hit, via: Some(predecessor) };
                lengths
                    .entry(len + 1)
                    .and_modify(|current: &mut Best| {
                        if candidate.covered > current.covered {
                            *current = candidate;
                        }
                    })
                    .or_insert(candidate);
            }
        }
        table.push(lengths);
    }
    table
}

/// Evaluates `graph` and returns the best path with its coverage.
///
/// Ties keep the first terminal in `terminal_ids` and, for one terminal, the shortest path.
pub fn coverage_report(
    graph: &ModuleGraph,
    threshold: f64,
) -> Result<CoverageReport, CoverageError> {
    if graph.terminal_ids().is_empty() {
        return Err(CoverageError::EmptyModule);
    }

    let table = build_table(graph, threshold);
    let mut winner: Option<(NodeId, usize, usize)> = None;
    for &terminal in graph.terminal_ids() {
        let Some(lengths) = table.get(terminal.index()) else {
            continue;
        };
        for (&len, best) in lengths {
            // covered / len > best_covered / best_len, without rounding.
            let better = winner.map_or(true, |(_, best_len, best_covered)| {
                best.covered * best_len > best_covered * len
            });
            if better {
                winner = Some((terminal, len, best.covered));
            }
        }
    }
    let Some((terminal, len, covered)) = winner else {
        return Err(CoverageError::EmptyModule);
    };

    let mut path = Vec::with_capacity(len);
    let mut cursor = Some(terminal);
    let mut remaining = len;
    while let Some(node_id) = cursor {
        path.push(node_id);
        cursor = table
            .get(node_id.index())
            .and_then(|lengths| lengths.get(&remaining))
            .and_then(|best| best.via);
        remaining -= 1;
    }
    path.reverse();

    Ok(CoverageReport { coverage: covered as f64 / len as f64, path, covered })
}

/// Returns the maximum, over all root-to-terminal paths, of the fraction of steps whose score
/// exceeds `threshold`.
pub fn coverage(graph: &ModuleGraph, threshold: f64) -> Result<f64, CoverageError> {
    coverage_report(graph, threshold).map(|report| report.coverage)
}
