use anyhow::{bail, Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};
use tcfill::annotate;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Default input when no path is given, matching the sheet the suite
/// exports next to its Playwright specs.
const DEFAULT_INPUT: &str = "tests/TestCaseBasic_with_Results.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) resolve paths ────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let output = match args.next() {
        Some(p) => PathBuf::from(p),
        None => derived_output(&input)?,
    };
    if args.next().is_some() {
        bail!("usage: tcfill [INPUT] [OUTPUT]");
    }
    info!(input = %input.display(), output = %output.display(), "startup");

    // ─── 3) annotate ─────────────────────────────────────────────────
    let summary = annotate::run(&input, &output)?;
    info!(rows = summary.total, covered = summary.covered, "all done");
    println!("Updated file saved as {}", output.display());
    Ok(())
}

/// `<input stem>_filled.csv` next to the input.
fn derived_output(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("cannot derive an output name from `{}`", input.display()))?;
    Ok(input.with_file_name(format!("{}_filled.csv", stem)))
}
