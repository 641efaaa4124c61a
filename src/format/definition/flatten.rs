// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::error::{DefinitionError, MalformedReason};
use crate::model::BlockId;

/// A definition with every parenthesised group lifted into its own block.
///
/// Block `0` holds the top level; each group is replaced in its parent's fragment by the
/// decimal id of the block that holds its interior. Ids are allocated in pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedDefinition {
    blocks: BTreeMap<BlockId, String>,
    /// Child block -> the block whose fragment references it.
    parents: BTreeMap<BlockId, BlockId>,
    next_id: BlockId,
}

/// Groups nested deeper than this are rejected.
pub const MAX_NESTING: usize = 64;

impl FlattenedDefinition {
    pub fn blocks(&self) -> &BTreeMap<BlockId, String> {
        &self.blocks
    }

    pub fn fragment(&self, block: BlockId) -> Option<&str> {
        self.blocks.get(&block).map(String::as_str)
    }

    /// One past the highest allocated block id.
    pub fn next_id(&self) -> BlockId {
        self.next_id
    }

    /// Returns the child block a token of `parent`'s fragment refers to.
    ///
    /// Only the references written by [`flatten`] resolve: a literal `01`, or a number naming
    /// a block that is not a direct child of `parent`, stays an identifier.
    pub fn resolve(&self, parent: BlockId, token: &str) -> Option<BlockId> {
        BlockId::from_token(token).filter(|block| self.parents.get(block) == Some(&parent))
    }

    fn allocate(&mut self, parent: BlockId) -> BlockId {
        let block = self.next_id;
        self.next_id = block.next();
        self.parents.insert(block, parent);
        block
    }
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | ',' | '+' | '-')
}

fn malformed(offset: usize, reason: MalformedReason) -> DefinitionError {
    DefinitionError::MalformedDefinition { offset, reason }
}

/// Flattens the nested groups of one module definition.
///
/// Unbalanced or empty groups, and groups glued to an identifier (`K1(K2)`), are rejected
/// instead of being silently truncated.
pub fn flatten(definition: &str) -> Result<FlattenedDefinition, DefinitionError> {
    let mut flattened = FlattenedDefinition {
        blocks: BTreeMap::new(),
        parents: BTreeMap::new(),
        next_id: BlockId::ROOT.next(),
    };
    flatten_into(definition.trim(), 0, 0, BlockId::ROOT, &mut flattened)?;
    Ok(flattened)
}

fn flatten_into(
    input: &str,
    base: usize,
    level: usize,
    block: BlockId,
    out: &mut FlattenedDefinition,
) -> Result<(), DefinitionError> {
    let mut fragment = String::with_capacity(input.len());
    let mut depth = 0usize;
    let mut group_start = 0usize;
    let mut prev: Option<char> = None;

    let mut chars = input.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '(' => {
                if depth == 0 {
                    if prev.is_some_and(|p| !is_separator(p)) {
                        return Err(malformed(base + idx, MalformedReason::GroupNotDelimited));
                    }
                    group_start = idx;
                }
                depth += 1;
                if level + depth > MAX_NESTING {
                    return Err(malformed(base + idx, MalformedReason::TooDeep));
                }
            }
            ')' => {
                if depth == 0 {
                    return Err(malformed(base + idx, MalformedReason::UnbalancedClose));
                }
                depth -= 1;
                if depth == 0 {
                    // A stray `)` right after the group is reported on the next iteration.
                    if chars.peek().is_some_and(|&(_, next)| !is_separator(next) && next != ')') {
                        return Err(malformed(base + idx, MalformedReason::GroupNotDelimited));
                    }

                    let inner_start = group_start + 1;
                    let inner = &input[inner_start..idx];
                    if inner.trim().is_empty() {
                        return Err(malformed(base + group_start, MalformedReason::EmptyGroup));
                    }

                    let nested = out.allocate(block);
                    fragment.push_str(itoa::Buffer::new().format(nested.get()));
                    flatten_into(inner, base + inner_start, level + 1, nested, out)?;
                }
            }
            _ if depth == 0 => fragment.push(ch),
            _ => {}
        }
        prev = Some(ch);
    }

    if depth > 0 {
        return Err(malformed(base + group_start, MalformedReason::UnclosedGroup));
    }

    out.blocks.insert(block, fragment);
    Ok(())
}
