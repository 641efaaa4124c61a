// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use smallvec::SmallVec;

use super::ids::NodeId;

/// Predecessor list of a reaction; almost every step has one or two.
pub type Sources = SmallVec<[NodeId; 2]>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("reaction {name:?} references unknown predecessor {predecessor} (graph has {len} nodes)")]
    UnknownPredecessor { name: String, predecessor: NodeId, len: usize },
    #[error("terminal step {node_id} does not exist (graph has {len} nodes)")]
    UnknownTerminal { node_id: NodeId, len: usize },
}

/// One reaction step of a module.
///
/// `name` is the literal subunit expression (`K00001+K00002-K00003`); an empty `source`
/// marks a root step with no prerequisite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionNode {
    name: String,
    score: f64,
    source: Sources,
}

impl ReactionNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn source(&self) -> &[NodeId] {
        &self.source
    }

    pub fn is_root(&self) -> bool {
        self.source.is_empty()
    }
}

/// Append-only arena of reaction nodes plus the module's final steps.
///
/// Predecessors always carry smaller ids than their successors, so iterating the arena in id
/// order is a topological order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModuleGraph {
    #[serde(serialize_with = "serialize_nodes")]
    nodes: Vec<ReactionNode>,
    terminal_ids: Vec<NodeId>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reaction with score 0 and returns its id.
    pub fn add_reaction(
        &mut self,
        name: impl Into<String>,
        predecessors: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        let len = self.nodes.len();
        if let Some(&predecessor) = predecessors.iter().find(|id| id.index() >= len) {
            return Err(GraphError::UnknownPredecessor { name, predecessor, len });
        }

        self.nodes.push(ReactionNode {
            name,
            score: 0.0,
            source: predecessors.iter().copied().collect(),
        });
        Ok(NodeId::new(len))
    }

    /// Records the module's final steps; only conversion sets them.
    pub(crate) fn set_terminal_ids(
        &mut self,
        terminal_ids: Vec<NodeId>,
    ) -> Result<(), GraphError> {
        let len = self.nodes.len();
        if let Some(&node_id) = terminal_ids.iter().find(|id| id.index() >= len) {
            return Err(GraphError::UnknownTerminal { node_id, len });
        }
        self.terminal_ids = terminal_ids;
        Ok(())
    }

    pub fn nodes(&self) -> &[ReactionNode] {
        &self.nodes
    }

    pub fn node(&self, node_id: NodeId) -> Option<&ReactionNode> {
        self.nodes.get(node_id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn terminal_ids(&self) -> &[NodeId] {
        &self.terminal_ids
    }

    pub fn set_score(&mut self, node_id: NodeId, score: f64) {
        if let Some(node) = self.nodes.get_mut(node_id.index()) {
            node.score = score;
        }
    }

    pub(crate) fn scores_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.nodes.iter_mut().map(|node| (node.name.as_str(), &mut node.score))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

#[derive(Serialize)]
struct IndexedNode<'a> {
    id: NodeId,
    #[serde(flatten)]
    node: &'a ReactionNode,
}

fn serialize_nodes<S: serde::Serializer>(
    nodes: &[ReactionNode],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(
        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| IndexedNode { id: NodeId::new(index), node }),
    )
}
