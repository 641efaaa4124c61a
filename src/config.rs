// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scoring options, read from an optional JSON file and overridden from the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::query::{AggregationMethod, ScoreError};

pub const DEFAULT_THRESHOLD: f64 = 0.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {path:?}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("threshold must be a finite number, got {value}")]
    InvalidThreshold { value: f64 },
    #[error(transparent)]
    UnsupportedMethod(#[from] ScoreError),
}

/// How reactions are scored and when a scored reaction counts as present.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringOptions {
    /// Aggregation of subunit abundances; ignored for presence data.
    pub method: AggregationMethod,
    /// A reaction counts towards coverage when its score is strictly greater.
    pub threshold: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self { method: AggregationMethod::default(), threshold: DEFAULT_THRESHOLD }
    }
}

impl ScoringOptions {
    pub fn from_json(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(text)
            .map_err(|source| ConfigError::Json { path: origin.to_path_buf(), source })?;
        options.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text, path)
    }

    /// Applies command-line overrides on top of these options.
    pub fn with_overrides(
        mut self,
        method: Option<&str>,
        threshold: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(method) = method {
            self.method = method.parse()?;
        }
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold { value: self.threshold });
        }
        Ok(self)
    }
}
