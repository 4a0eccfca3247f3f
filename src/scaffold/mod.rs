mod report;

pub use report::{EntryOutcome, ScaffoldReport};

use std::io;

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::{debug, info};

use crate::layout::{Layout, LayoutEntry};
use crate::util::fs::{ensure_dir, touch};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    pub dry_run: bool,
}

/// Create every layout directory under `root` and drop a marker file in each.
///
/// Entries are processed in layout order and the first filesystem error
/// aborts the run; entries handled before it stay on disk. Re-running picks
/// up where a failed run stopped.
pub fn run(root: &Utf8Path, layout: &Layout, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for entry in layout.entries(root) {
        let outcome = if options.dry_run {
            plan_entry(&entry)?
        } else {
            ensure_entry(&entry)?
        };
        debug!(
            dir = %entry.dir,
            dir_created = outcome.dir_created,
            marker_created = outcome.marker_created,
            dry_run = options.dry_run,
            "scaffolded entry"
        );
        report.entries.push(outcome);
    }

    info!(
        root = %root,
        created_dirs = report.created_dirs(),
        created_markers = report.created_markers(),
        dry_run = options.dry_run,
        "scaffold finished"
    );
    Ok(report)
}

fn ensure_entry(entry: &LayoutEntry) -> Result<EntryOutcome> {
    let dir_created =
        ensure_dir(&entry.dir).with_context(|| format!("creating directory {}", entry.dir))?;
    let marker_created =
        touch(&entry.marker).with_context(|| format!("creating marker {}", entry.marker))?;

    Ok(EntryOutcome {
        relative: entry.relative.clone(),
        dir_created,
        marker_created,
    })
}

/// Work out what `ensure_entry` would do without writing.
///
/// Obstructions that would make the real run fail are reported as the same
/// errors, so a dry run never promises a tree that cannot be created.
fn plan_entry(entry: &LayoutEntry) -> Result<EntryOutcome> {
    if let Some(blocker) = entry.dir.ancestors().find(|p| p.exists() && !p.is_dir()) {
        let err = io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{blocker} exists and is not a directory"),
        );
        return Err(err).with_context(|| format!("creating directory {}", entry.dir));
    }
    if entry.marker.is_dir() {
        let err = io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", entry.marker),
        );
        return Err(err).with_context(|| format!("creating marker {}", entry.marker));
    }

    Ok(EntryOutcome {
        relative: entry.relative.clone(),
        dir_created: !entry.dir.is_dir(),
        marker_created: !entry.marker.exists(),
    })
}
