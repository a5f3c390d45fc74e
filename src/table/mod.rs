// src/table/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tempfile::NamedTempFile;
use tracing::debug;

/// A delimited table held fully in memory: one header row plus every data
/// row, in file order. Cells are plain strings; columns are resolved by
/// name through the header.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of `name` in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of `name`, appending the column (with empty cells in every
    /// row) when the header does not already carry it.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        }
    }
}

/// Read the whole CSV at `path` into memory.
///
/// Field counts are strict: a record whose width differs from the header
/// aborts the read, so a malformed file never produces output.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("opening input CSV `{}`", path.display()))?;
    let mut rdr = ReaderBuilder::new().from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header row of `{}`", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| {
            format!(
                "CSV parse error in `{}` at record {}",
                path.display(),
                idx + 1
            )
        })?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    debug!(rows = rows.len(), columns = headers.len(), "read table");
    Ok(Table { headers, rows })
}

/// Write `table` to `path` atomically: serialize into a temporary file in
/// the destination directory, then rename it over `path`. A failure at any
/// point leaves no file at `path`.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in `{}`", dir.display()))?;

    {
        let mut wtr = csv::Writer::from_writer(tmp.as_file_mut());
        wtr.write_record(&table.headers)
            .context("writing header row")?;
        for (idx, row) in table.rows.iter().enumerate() {
            wtr.write_record(row)
                .with_context(|| format!("writing record {}", idx + 1))?;
        }
        wtr.flush().context("flushing CSV writer")?;
    }

    tmp.persist(path)
        .with_context(|| format!("renaming temporary file to `{}`", path.display()))?;
    debug!(path = %path.display(), "wrote table");
    Ok(())
}
