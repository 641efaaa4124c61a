// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Queries over module graphs.
//!
//! Scoring annotates each reaction step from identifier data; coverage reduces a scored graph
//! to one completeness value.

pub mod coverage;
pub mod score;
pub mod suggest;

pub use coverage::{coverage, coverage_report, CoverageError, CoverageReport};
pub use score::{
    score, score_abundance, score_presence, subunits, AggregationMethod, Observations,
    ScoreError, Subunits,
};
