// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::{csv_error, open, record_line, StoreError};
use crate::model::ModuleId;

/// Reads a `module<TAB>definition` table without a header row.
///
/// Blank lines are skipped; a key seen twice keeps its last definition.
pub fn read_definitions(
    reader: impl Read,
    origin: &Path,
) -> Result<BTreeMap<ModuleId, String>, StoreError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut definitions = BTreeMap::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error(origin))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = record_line(&record);
        let key = record.get(0).unwrap_or_default().trim();
        let Some(definition) = record.get(1) else {
            return Err(StoreError::MissingColumn {
                path: origin.to_path_buf(),
                line,
                column: "definition",
            });
        };
        let module_id = ModuleId::new(key).map_err(|source| StoreError::InvalidModuleId {
            path: origin.to_path_buf(),
            line,
            value: key.to_owned(),
            source,
        })?;

        if definitions.insert(module_id, definition.trim().to_owned()).is_some() {
            tracing::warn!(module = key, line, "duplicate module definition, keeping the last one");
        }
    }
    Ok(definitions)
}

pub fn read_definitions_file(path: &Path) -> Result<BTreeMap<ModuleId, String>, StoreError> {
    read_definitions(open(path)?, path)
}
