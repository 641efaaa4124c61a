// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const MIN_RATIO: f64 = 0.6;

/// Returns the candidate most similar to `needle`, if any is similar enough to be worth a
/// "did you mean" hint.
pub fn closest<'a>(
    needle: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = needle.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(f64, &'a str)> = None;
    for candidate in candidates {
        let ratio = rapidfuzz::fuzz::ratio(needle.chars(), candidate.to_ascii_lowercase().chars());
        if ratio < MIN_RATIO {
            continue;
        }
        if best.map_or(true, |(best_ratio, _)| ratio > best_ratio) {
            best = Some((ratio, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}
