// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use super::{csv_error, open, record_line, StoreError};

/// Reads an identifier list, one identifier per line.
pub fn read_presence(reader: impl Read, origin: &Path) -> Result<HashSet<String>, StoreError> {
    let mut observed = HashSet::new();
    for line in BufReader::new(reader).lines() {
        let line =
            line.map_err(|source| StoreError::Io { path: origin.to_path_buf(), source })?;
        let identifier = line.trim();
        if !identifier.is_empty() {
            observed.insert(identifier.to_owned());
        }
    }
    Ok(observed)
}

pub fn read_presence_file(path: &Path) -> Result<HashSet<String>, StoreError> {
    read_presence(open(path)?, path)
}

/// Identifier abundances, one column per sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbundanceTable {
    samples: Vec<String>,
    columns: Vec<HashMap<String, f64>>,
}

impl AbundanceTable {
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// One identifier -> value map per sample, in header order.
    pub fn columns(&self) -> &[HashMap<String, f64>] {
        &self.columns
    }

    pub fn column(&self, sample: &str) -> Option<&HashMap<String, f64>> {
        let index = self.samples.iter().position(|name| name == sample)?;
        self.columns.get(index)
    }
}

/// Reads an identifier x sample matrix.
///
/// The first header cell is ignored, the others name the samples. Empty cells count as 0.
pub fn read_abundance(reader: impl Read, origin: &Path) -> Result<AbundanceTable, StoreError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error(origin))?;
    if headers.len() < 2 {
        return Err(StoreError::MissingColumn {
            path: origin.to_path_buf(),
            line: 1,
            column: "sample",
        });
    }
    let samples: Vec<String> = headers.iter().skip(1).map(|name| name.trim().to_owned()).collect();
    let mut columns = vec![HashMap::new(); samples.len()];

    for record in rdr.records() {
        let record = record.map_err(csv_error(origin))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record_line(&record);
        if record.len() < samples.len() + 1 {
            return Err(StoreError::MissingColumn {
                path: origin.to_path_buf(),
                line,
                column: "sample",
            });
        }
        let identifier = record.get(0).unwrap_or_default().trim();
        if identifier.is_empty() {
            continue;
        }
        if columns.first().is_some_and(|column| column.contains_key(identifier)) {
            tracing::warn!(identifier, line, "duplicate identifier row, keeping the last one");
        }

        for ((cell, sample), column) in record.iter().skip(1).zip(&samples).zip(&mut columns) {
            let cell = cell.trim();
            let value = if cell.is_empty() {
                0.0
            } else {
                cell.parse::<f64>().map_err(|_| StoreError::InvalidNumber {
                    path: origin.to_path_buf(),
                    line,
                    sample: sample.clone(),
                    value: cell.to_owned(),
                })?
            };
            column.insert(identifier.to_owned(), value);
        }
    }

    Ok(AbundanceTable { samples, columns })
}

pub fn read_abundance_file(path: &Path) -> Result<AbundanceTable, StoreError> {
    read_abundance(open(path)?, path)
}
