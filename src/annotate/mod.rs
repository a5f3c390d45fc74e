//! Run driver: read the test-case table, classify every row, write the
//! annotated copy.

use crate::classify::{classify, Outcome};
use crate::table::{read_table, write_table};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Column the classifier reads the free-text description from.
pub const DETAILS_COLUMN: &str = "Test Case Details";
/// Column naming the sub-module under test.
pub const SUB_MODULE_COLUMN: &str = "Sub Module";
/// Column the classification label is written to.
pub const RESULT_COLUMN: &str = "Automated Actual Result";

/// Row counts for one run, grouped by outcome.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    /// Rows labelled as covered by the automated suite.
    pub covered: usize,
    /// Rows that never entered scope.
    pub ignored: usize,
    /// In-scope rows dropped by an exclusion refinement.
    pub excluded: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Covered => self.covered += 1,
            Outcome::Ignore => self.ignored += 1,
            _ => self.excluded += 1,
        }
    }
}

/// Annotate the table at `input` and write the result to `output`.
///
/// The input is read fully before any output is produced; required columns
/// are checked before a single row is classified; the output file appears
/// atomically or not at all. `input` is never modified.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn run(input: &Path, output: &Path) -> Result<RunSummary> {
    let mut table = read_table(input)?;

    let details_idx = table.column_index(DETAILS_COLUMN).with_context(|| {
        format!(
            "input `{}` has no `{}` column",
            input.display(),
            DETAILS_COLUMN
        )
    })?;
    let sub_module_idx = table.column_index(SUB_MODULE_COLUMN).with_context(|| {
        format!(
            "input `{}` has no `{}` column",
            input.display(),
            SUB_MODULE_COLUMN
        )
    })?;
    let result_idx = table.ensure_column(RESULT_COLUMN);

    let mut summary = RunSummary::default();
    for row in &mut table.rows {
        let outcome = classify(&row[details_idx], &row[sub_module_idx]);
        row[result_idx] = outcome.as_str().to_string();
        summary.record(outcome);
    }

    write_table(output, &table)?;
    info!(
        rows = summary.total,
        covered = summary.covered,
        ignored = summary.ignored,
        excluded = summary.excluded,
        "annotated table written"
    );
    Ok(summary)
}
