// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::error::DefinitionError;
use super::flatten::{flatten, FlattenedDefinition};
use crate::model::{BlockId, ModuleGraph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `' '`: the next step requires this one.
    Then,
    /// `','`: alternatives of the same block.
    Or,
    /// `'+'`: required subunit of a complex.
    Plus,
    /// `'-'`: optional subunit of a complex.
    Minus,
}

impl Separator {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Then),
            ',' => Some(Self::Or),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Then => ' ',
            Self::Or => ',',
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    fn joins_subunits(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// Splits a fragment into `(token, separator)` pairs; the last token is closed by an implicit
/// `,` so that every block ends by emitting its final alternative.
struct Tokens<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (&'a str, Separator);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let split = rest
            .char_indices()
            .find_map(|(idx, ch)| Separator::from_char(ch).map(|separator| (idx, separator)));
        match split {
            Some((idx, separator)) => {
                // Separators are ASCII, so `idx + 1` is a char boundary.
                self.rest = Some(&rest[idx + 1..]);
                Some((&rest[..idx], separator))
            }
            None => {
                self.rest = None;
                Some((rest, Separator::Or))
            }
        }
    }
}

fn tokens(fragment: &str) -> Tokens<'_> {
    Tokens { rest: Some(fragment) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Steps of the pathway: emits reaction nodes.
    Plain,
    /// Inside a `+`/`-` combination: only produces subunit names.
    Complex,
}

/// The block being scanned.
struct Frame<'a, 'p> {
    block: BlockId,
    fragment: &'a str,
    context: Context,
    inherited: &'p [NodeId],
}

impl Frame<'_, '_> {
    fn structural_violation(&self) -> DefinitionError {
        DefinitionError::StructuralViolation {
            block: self.block,
            fragment: self.fragment.to_owned(),
        }
    }

    fn empty_step(&self) -> DefinitionError {
        DefinitionError::EmptyStep { block: self.block, fragment: self.fragment.to_owned() }
    }
}

/// Accumulator threaded through the token scan of one block.
#[derive(Debug)]
struct ScanState {
    /// Names of the step being assembled; more than one after a complex expansion.
    pending_names: Vec<String>,
    predecessors: Vec<NodeId>,
    in_complex: bool,
    /// Final steps of the block (plain context).
    steps: Vec<NodeId>,
    /// Closed alternatives (complex context).
    alternatives: Vec<String>,
}

impl ScanState {
    fn new(inherited: &[NodeId]) -> Self {
        Self {
            pending_names: vec![String::new()],
            predecessors: inherited.to_vec(),
            in_complex: false,
            steps: Vec::new(),
            alternatives: Vec::new(),
        }
    }

    fn take_names(&mut self) -> Vec<String> {
        std::mem::replace(&mut self.pending_names, vec![String::new()])
    }
}

struct Converter<'a> {
    flattened: &'a FlattenedDefinition,
    graph: ModuleGraph,
}

impl<'a> Converter<'a> {
    fn frame<'p>(
        &self,
        block: BlockId,
        context: Context,
        inherited: &'p [NodeId],
    ) -> Frame<'a, 'p> {
        let flattened: &'a FlattenedDefinition = self.flattened;
        Frame { block, fragment: flattened.fragment(block).unwrap_or_default(), context, inherited }
    }

    /// Converts one block into reaction nodes and returns the block's final steps.
    fn convert_block(
        &mut self,
        block: BlockId,
        inherited: &[NodeId],
    ) -> Result<Vec<NodeId>, DefinitionError> {
        let frame = self.frame(block, Context::Plain, inherited);
        tracing::trace!(%block, fragment = frame.fragment, "converting block");
        let state = tokens(frame.fragment)
            .try_fold(ScanState::new(inherited), |state, (token, separator)| {
                self.step(&frame, state, token, separator)
            })?;
        Ok(state.steps)
    }

    /// Expands a complex block into every combined subunit name, each prefixed by one of
    /// `prefixes` (prefix-major order).
    fn expand_complex(
        &mut self,
        block: BlockId,
        prefixes: &[String],
    ) -> Result<Vec<String>, DefinitionError> {
        let frame = self.frame(block, Context::Complex, &[]);
        let state = tokens(frame.fragment)
            .try_fold(ScanState::new(&[]), |state, (token, separator)| {
                self.step(&frame, state, token, separator)
            })?;

        let mut combined = Vec::with_capacity(prefixes.len() * state.alternatives.len());
        for prefix in prefixes {
            for alternative in &state.alternatives {
                combined.push(format!("{prefix}{alternative}"));
            }
        }
        Ok(combined)
    }

    fn step(
        &mut self,
        frame: &Frame<'a, '_>,
        mut state: ScanState,
        token: &str,
        separator: Separator,
    ) -> Result<ScanState, DefinitionError> {
        if frame.context == Context::Complex && separator == Separator::Then {
            return Err(frame.structural_violation());
        }
        if separator.joins_subunits() {
            state.in_complex = true;
        }

        match self.flattened.resolve(frame.block, token) {
            Some(nested) if state.in_complex => {
                state.pending_names = self.expand_complex(nested, &state.pending_names)?;
                self.close_run(frame, &mut state, separator)?;
            }
            Some(nested) => {
                // An alternation directly inside an alternation of subunits.
                if frame.context == Context::Complex {
                    return Err(frame.structural_violation());
                }
                let tails = self.convert_block(nested, &state.predecessors)?;
                if separator == Separator::Then {
                    state.predecessors = tails;
                } else {
                    state.steps.extend(tails);
                    state.predecessors = frame.inherited.to_vec();
                }
            }
            None => {
                for name in &mut state.pending_names {
                    name.push_str(token);
                }
                self.close_run(frame, &mut state, separator)?;
            }
        }

        if !separator.joins_subunits() {
            state.in_complex = false;
        }
        Ok(state)
    }

    fn close_run(
        &mut self,
        frame: &Frame<'a, '_>,
        state: &mut ScanState,
        separator: Separator,
    ) -> Result<(), DefinitionError> {
        match (separator, frame.context) {
            (Separator::Plus | Separator::Minus, _) => {
                let ch = separator.as_char();
                for name in &mut state.pending_names {
                    name.push(ch);
                }
            }
            (Separator::Then, _) => {
                let names = state.take_names();
                state.predecessors = self.emit(frame, names, &state.predecessors)?;
            }
            (Separator::Or, Context::Plain) => {
                let names = state.take_names();
                let emitted = self.emit(frame, names, &state.predecessors)?;
                state.steps.extend(emitted);
                state.predecessors = frame.inherited.to_vec();
            }
            (Separator::Or, Context::Complex) => {
                let names = state.take_names();
                if names.iter().any(String::is_empty) {
                    return Err(frame.empty_step());
                }
                state.alternatives.extend(names);
            }
        }
        Ok(())
    }

    fn emit(
        &mut self,
        frame: &Frame<'a, '_>,
        names: Vec<String>,
        predecessors: &[NodeId],
    ) -> Result<Vec<NodeId>, DefinitionError> {
        let mut emitted = Vec::with_capacity(names.len());
        for name in names {
            if name.is_empty() {
                return Err(frame.empty_step());
            }
            emitted.push(self.graph.add_reaction(name, predecessors)?);
        }
        Ok(emitted)
    }
}

/// Builds the reaction graph of a flattened definition.
///
/// A blank definition yields an empty graph (no steps, no terminals).
pub fn convert(flattened: &FlattenedDefinition) -> Result<ModuleGraph, DefinitionError> {
    let root = flattened.fragment(BlockId::ROOT).unwrap_or_default();
    if root.trim().is_empty() {
        return Ok(ModuleGraph::new());
    }

    let mut converter = Converter { flattened, graph: ModuleGraph::new() };
    let terminals = converter.convert_block(BlockId::ROOT, &[])?;
    converter.graph.set_terminal_ids(terminals)?;
    Ok(converter.graph)
}

/// Flattens and converts one raw definition string.
pub fn parse_definition(definition: &str) -> Result<ModuleGraph, DefinitionError> {
    convert(&flatten(definition)?)
}
