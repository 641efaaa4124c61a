// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::flatten::MAX_NESTING;
use crate::model::{BlockId, GraphError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    UnbalancedClose,
    UnclosedGroup,
    EmptyGroup,
    GroupNotDelimited,
    TooDeep,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedClose => f.write_str("')' without a matching '('"),
            Self::UnclosedGroup => f.write_str("'(' is never closed"),
            Self::EmptyGroup => f.write_str("empty parenthesised group"),
            Self::GroupNotDelimited => {
                f.write_str("group must be separated from identifiers by ' ', ',', '+' or '-'")
            }
            Self::TooDeep => write!(f, "groups nested deeper than {MAX_NESTING} levels"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    /// Raised while flattening; `offset` is a byte offset into the trimmed definition.
    #[error("malformed definition at byte {offset}: {reason}")]
    MalformedDefinition { offset: usize, reason: MalformedReason },
    #[error("empty reaction step in block {block}: {fragment:?}")]
    EmptyStep { block: BlockId, fragment: String },
    /// A complex subunit must be an alternation of subunits, never a multi-step pathway.
    #[error("complex subunit block {block} is not a plain alternation: {fragment:?}")]
    StructuralViolation { block: BlockId, fragment: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl DefinitionError {
    /// Whether the error condemns only the module it came from (and not the whole input file).
    pub fn is_per_module(&self) -> bool {
        matches!(self, Self::StructuralViolation { .. })
    }
}
