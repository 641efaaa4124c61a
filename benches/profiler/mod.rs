// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Bench knobs read from `MODCOV_BENCH_*`; out-of-range values are clamped.
struct Settings {
    samples: usize,
    warm_up: Duration,
    measurement: Duration,
    /// Sampling frequency of the flamegraph profiler; `None` leaves profiling off.
    profile_hz: Option<i32>,
}

impl Settings {
    fn from_env() -> Self {
        let var = |suffix: &str| std::env::var(format!("MODCOV_BENCH_{suffix}")).ok();
        let number = |suffix: &str| var(suffix).and_then(|raw| raw.trim().parse::<u64>().ok());

        Self {
            samples: number("SAMPLES").map_or(40, |n| n.clamp(10, 500) as usize),
            warm_up: Duration::from_millis(number("WARMUP_MS").map_or(1_500, |ms| ms.max(100))),
            measurement: Duration::from_millis(
                number("MEASURE_MS").map_or(4_000, |ms| ms.max(500)),
            ),
            profile_hz: var("PROFILE_HZ")
                .and_then(|raw| raw.trim().parse::<i32>().ok())
                .map(|hz| hz.clamp(1, 1_000)),
        }
    }
}

/// Criterion configured from the environment; set `MODCOV_BENCH_PROFILE_HZ` to write
/// flamegraphs under `target/criterion/<group>/<bench>/profile/`.
pub fn criterion() -> Criterion {
    let settings = Settings::from_env();
    let criterion = Criterion::default()
        .sample_size(settings.samples)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement);

    match settings.profile_hz {
        Some(hz) => criterion.with_profiler(PProfProfiler::new(hz, Output::Flamegraph(None))),
        None => criterion,
    }
}
