// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::ModuleId;

fn mid(value: &str) -> ModuleId {
    ModuleId::new(value).expect("module id")
}

/// A small definition table covering chains, alternatives, complexes, a rejected complex and
/// a blank definition.
pub(crate) fn module_definitions() -> Vec<(ModuleId, String)> {
    [
        ("M00001", "K1 K2"),
        ("M00002", "K1,K2"),
        ("M00003", "K1+K2-K3"),
        ("M00004", "K0+(K1 K2)"),
        ("M00005", ""),
        ("M00006", "K1 (K2,K3 K4) K5"),
    ]
    .into_iter()
    .map(|(module_id, definition)| (mid(module_id), definition.to_owned()))
    .collect()
}
