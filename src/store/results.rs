// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use serde::Serialize;

use super::{csv_error, StoreError};
use crate::model::ModuleId;

/// Cell marker for a module without a coverage value.
pub const MISSING: &str = "NA";

/// Renders a coverage value the way result tables store it (`1.0`, `0.5`, `NA`).
pub fn format_coverage(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:?}"),
        None => MISSING.to_owned(),
    }
}

fn tsv_writer<W: Write>(writer: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer)
}

/// Writes `module<TAB>coverage` rows without a header.
pub fn write_presence_results<'a, W: Write>(
    writer: W,
    origin: &Path,
    rows: impl IntoIterator<Item = (&'a ModuleId, Option<f64>)>,
) -> Result<(), StoreError> {
    let mut wtr = tsv_writer(writer);
    for (module_id, value) in rows {
        wtr.write_record([module_id.as_str(), format_coverage(value).as_str()])
            .map_err(csv_error(origin))?;
    }
    flush(wtr, origin)
}

/// Writes a `module<TAB>sample...` header followed by one row per module.
pub fn write_abundance_results<'a, W: Write>(
    writer: W,
    origin: &Path,
    samples: &[String],
    rows: impl IntoIterator<Item = (&'a ModuleId, Vec<Option<f64>>)>,
) -> Result<(), StoreError> {
    let mut wtr = tsv_writer(writer);
    wtr.write_record(std::iter::once("module").chain(samples.iter().map(String::as_str)))
        .map_err(csv_error(origin))?;

    let mut record = Vec::with_capacity(samples.len() + 1);
    for (module_id, values) in rows {
        record.clear();
        record.push(module_id.as_str().to_owned());
        record.extend(values.into_iter().map(format_coverage));
        wtr.write_record(&record).map_err(csv_error(origin))?;
    }
    flush(wtr, origin)
}

fn flush<W: Write>(mut wtr: Writer<W>, origin: &Path) -> Result<(), StoreError> {
    wtr.flush().map_err(|source| StoreError::Io { path: origin.to_path_buf(), source })
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    origin: &Path,
    value: &T,
) -> Result<(), StoreError> {
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|source| StoreError::Json { path: origin.to_path_buf(), source })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| StoreError::Io { path: origin.to_path_buf(), source })
}
