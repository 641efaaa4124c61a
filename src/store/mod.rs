// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading and writing the tab-separated tables and JSON documents the CLI works with.
//!
//! Readers take any `io::Read` plus the path it came from (used only in error messages), so
//! they can be exercised on in-memory input; `*_file` helpers open the path themselves.

pub mod definitions;
pub mod observations;
pub mod results;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::IdError;

pub use definitions::{read_definitions, read_definitions_file};
pub use observations::{
    read_abundance, read_abundance_file, read_presence, read_presence_file, AbundanceTable,
};
pub use results::{format_coverage, write_abundance_results, write_json, write_presence_results};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("tsv error at {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("json error at {path:?}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("invalid module id {value:?} at {path:?} line {line}: {source}")]
    InvalidModuleId { path: PathBuf, line: u64, value: String, source: IdError },
    #[error("invalid number {value:?} for sample {sample:?} at {path:?} line {line}")]
    InvalidNumber { path: PathBuf, line: u64, sample: String, value: String },
    #[error("missing {column} column at {path:?} line {line}")]
    MissingColumn { path: PathBuf, line: u64, column: &'static str },
}

pub(crate) fn open(path: &Path) -> Result<File, StoreError> {
    File::open(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

pub fn create(path: &Path) -> Result<File, StoreError> {
    File::create(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> StoreError + '_ {
    move |source| StoreError::Csv { path: path.to_path_buf(), source }
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}
