// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::suggest::closest;
use crate::model::ModuleGraph;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("unsupported aggregation method {name:?}{}", did_you_mean(*.suggestion))]
    UnsupportedMethod { name: String, suggestion: Option<&'static str> },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(suggestion) => format!(" (did you mean {suggestion:?}?)"),
        None => format!(" (expected one of {})", AggregationMethod::NAMES.join(", ")),
    }
}

/// How the subunit values of one reaction are combined in abundance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AggregationMethod {
    Minimum,
    #[default]
    Mean,
    Sum,
    /// 1 when every subunit value is positive, else 0.
    Bool,
}

impl AggregationMethod {
    pub const ALL: [Self; 4] = [Self::Minimum, Self::Mean, Self::Sum, Self::Bool];
    pub const NAMES: [&'static str; 4] = ["minimum", "mean", "sum", "bool"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Bool => "bool",
        }
    }

    /// `values` is never empty: every reaction name has at least one essential subunit.
    fn aggregate(self, values: &[f64]) -> f64 {
        let minimum = || values.iter().copied().fold(f64::INFINITY, f64::min);
        match self {
            Self::Minimum => minimum(),
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Self::Sum => values.iter().sum(),
            Self::Bool => {
                if minimum() > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationMethod {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|method| method.as_str() == s).ok_or_else(|| {
            ScoreError::UnsupportedMethod {
                name: s.to_owned(),
                suggestion: closest(s, Self::NAMES),
            }
        })
    }
}

impl TryFrom<String> for AggregationMethod {
    type Error = ScoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Subunits of a reaction name.
///
/// The name is split on `+`; the part of each piece before its first `-` is essential (empty
/// means "always satisfied", as for the `--` placeholder), the parts after it are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subunits<'a> {
    pub essential: Vec<&'a str>,
    pub optional: Vec<&'a str>,
}

pub fn subunits(name: &str) -> Subunits<'_> {
    let mut essential = Vec::new();
    let mut optional = Vec::new();
    for piece in name.split('+') {
        let mut parts = piece.split('-');
        essential.push(parts.next().unwrap_or_default());
        optional.extend(parts.filter(|part| !part.is_empty()));
    }
    Subunits { essential, optional }
}

/// Identifier data for one scoring pass.
#[derive(Debug, Clone, Copy)]
pub enum Observations<'a> {
    /// Identifiers observed at all.
    Presence(&'a HashSet<String>),
    /// One abundance value per identifier (one sample column).
    Abundance(&'a HashMap<String, f64>),
}

/// Overwrites the score of every reaction of `graph`; `method` only applies to abundance data.
pub fn score(graph: &mut ModuleGraph, observations: Observations<'_>, method: AggregationMethod) {
    match observations {
        Observations::Presence(observed) => score_presence(graph, observed),
        Observations::Abundance(column) => score_abundance(graph, column, method),
    }
}

/// Scores each reaction 1 when all of its essential subunits are observed, else 0.
pub fn score_presence(graph: &mut ModuleGraph, observed: &HashSet<String>) {
    for (name, score) in graph.scores_mut() {
        let satisfied = subunits(name)
            .essential
            .iter()
            .all(|subunit| subunit.is_empty() || observed.contains(*subunit));
        *score = if satisfied { 1.0 } else { 0.0 };
    }
}

/// Scores each reaction by aggregating the abundance of all of its subunits.
///
/// Missing identifiers count as 0; optional subunits are included like essential ones.
pub fn score_abundance(
    graph: &mut ModuleGraph,
    column: &HashMap<String, f64>,
    method: AggregationMethod,
) {
    let lookup = |subunit: &str| column.get(subunit).copied().unwrap_or(0.0);
    let mut values = Vec::new();
    for (name, score) in graph.scores_mut() {
        let Subunits { essential, optional } = subunits(name);
        values.clear();
        values.extend(essential.iter().map(|subunit| {
            if subunit.is_empty() {
                1.0
            } else {
                lookup(subunit)
            }
        }));
        values.extend(optional.iter().map(|subunit| lookup(subunit)));
        *score = method.aggregate(&values);
    }
}
