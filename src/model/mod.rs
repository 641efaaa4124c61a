// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A module definition becomes a `ModuleGraph`: an arena of reaction steps linked to their
//! prerequisites. A definition table becomes a `ModuleCollection`.

pub mod collection;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use collection::ModuleCollection;
pub use graph::{GraphError, ModuleGraph, ReactionNode, Sources};
pub use ids::{BlockId, Id, IdError, ModuleId, NodeId};
