// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::collections::HashSet;

use modcov::model::{ModuleGraph, ModuleId};

pub fn checksum_graph(graph: &ModuleGraph) -> u64 {
    let mut acc = 0u64;
    for node in graph.nodes() {
        acc = acc.wrapping_mul(131).wrapping_add(node.name().len() as u64);
        for source in node.source() {
            acc = acc.wrapping_mul(131).wrapping_add(source.index() as u64);
        }
    }
    for terminal in graph.terminal_ids() {
        acc = acc.wrapping_mul(131).wrapping_add(terminal.index() as u64);
    }
    acc
}

struct Identifiers(usize);

impl Identifiers {
    fn next(&mut self) -> String {
        self.0 += 1;
        format!("K{:05}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub steps: usize,
    pub alternatives: usize,
    pub depth: usize,
}

impl Params {
    pub const fn new(steps: usize, alternatives: usize, depth: usize) -> Self {
        Self { steps, alternatives, depth }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumNested,
    LargeWide,
}

impl Case {
    pub const ALL: [Self; 3] = [Self::Small, Self::MediumNested, Self::LargeWide];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumNested => "medium_nested",
            Self::LargeWide => "large_wide",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(6, 2, 0),
            Self::MediumNested => Params::new(16, 3, 2),
            Self::LargeWide => Params::new(40, 5, 3),
        }
    }
}

fn alternation(ids: &mut Identifiers, width: usize, depth: usize) -> String {
    let options: Vec<String> = (0..width)
        .map(|idx| {
            if depth > 0 && idx + 1 == width {
                alternation(ids, width, depth - 1)
            } else if idx % 2 == 0 {
                ids.next()
            } else {
                format!("{} {}", ids.next(), ids.next())
            }
        })
        .collect();
    format!("({})", options.join(","))
}

/// Deterministic definition mixing plain steps, complexes and nested alternations.
///
/// - Every fourth step is an alternation nested `depth` levels deep.
/// - Complex steps combine essential and optional subunits, one of them over an alternation.
pub fn definition(params: Params) -> String {
    let mut ids = Identifiers(0);
    let mut steps = Vec::with_capacity(params.steps);
    for step in 0..params.steps {
        let text = match step % 4 {
            0 => ids.next(),
            1 => format!("{}+{}-{}", ids.next(), ids.next(), ids.next()),
            2 => format!("{}+({},{})", ids.next(), ids.next(), ids.next()),
            _ => alternation(&mut ids, params.alternatives, params.depth),
        };
        steps.push(text);
    }
    steps.join(" ")
}

pub fn fixture(case: Case) -> String {
    definition(case.params())
}

/// A definition table with `modules` copies of each case, keyed `M00000`, `M00001`, ...
pub fn module_table(modules: usize) -> Vec<(ModuleId, String)> {
    (0..modules)
        .map(|idx| {
            let case = Case::ALL[idx % Case::ALL.len()];
            let module_id = ModuleId::new(format!("M{idx:05}")).expect("valid module id");
            (module_id, fixture(case))
        })
        .collect()
}

/// Every identifier with an odd number, up to `limit`.
pub fn observed(limit: usize) -> HashSet<String> {
    (1..=limit).filter(|n| n % 2 == 1).map(|n| format!("K{n:05}")).collect()
}
