// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Modcov: reaction coverage of pathway modules.
//!
//! Module definitions (`K1 (K2,K3) K4+K5-K6`) are parsed into graphs of reaction steps,
//! scored against observed identifiers and reduced to the fraction of satisfied steps along
//! the best path through each module.

pub mod config;
pub mod format;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
