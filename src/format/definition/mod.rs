// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Module definition language: `K1 K2 (K3,K4) K5+K6-K7`.
//!
//! - `' '` separates sequential steps, `','` alternatives;
//! - `'+'` joins required subunits of a complex, `'-'` optional ones;
//! - parentheses group any of the above.
//!
//! Parsing runs in two passes: [`flatten`] lifts every parenthesised group into its own block,
//! then [`convert`] walks the blocks and emits the reaction graph.

mod convert;
mod error;
mod flatten;

pub use convert::{convert, parse_definition};
pub use error::{DefinitionError, MalformedReason};
pub use flatten::{flatten, FlattenedDefinition, MAX_NESTING};
