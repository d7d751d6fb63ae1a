//! Sequential cleaning of discovered documents.

use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::Result;
use crate::filter::{StripRules, strip_unwanted_sections};
use crate::walker::collect_markdown_files;

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Markdown documents examined.
    pub examined: usize,
    /// Documents whose content changed and were rewritten.
    pub rewritten: usize,
}

/// Clean every Markdown document reachable from `target`.
///
/// Documents are processed strictly one at a time. A document is
/// rewritten only when the filtered text differs from what was read,
/// so untouched files keep their modification timestamps. The first
/// I/O failure aborts the run.
pub async fn clean_path(target: &Path, rules: &StripRules) -> Result<CleanSummary> {
    let files = collect_markdown_files(target).await?;
    let mut summary = CleanSummary {
        examined: files.len(),
        rewritten: 0,
    };

    for path in &files {
        let original = fs::read_to_string(path).await?;
        let updated = strip_unwanted_sections(&original, rules);

        if updated == original {
            debug!(path = %path.display(), "no change");
            continue;
        }

        fs::write(path, &updated).await?;
        summary.rewritten += 1;
        debug!(path = %path.display(), "rewrote document");
    }

    Ok(summary)
}
