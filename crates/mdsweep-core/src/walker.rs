//! Discovery of Markdown documents beneath a target path.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// File extension identifying the documents this tool rewrites.
pub const MARKDOWN_EXTENSION: &str = "md";

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION)
}

/// Resolve `target` to the set of Markdown documents to process.
///
/// A `.md` file resolves to itself; a directory resolves to every `.md`
/// file anywhere beneath it. Anything else is an [`Error::InvalidPath`].
/// Traversal order follows the underlying directory walk and is not
/// guaranteed stable across filesystems.
pub async fn collect_markdown_files(target: &Path) -> Result<Vec<PathBuf>> {
    let Ok(meta) = fs::metadata(target).await else {
        return Err(Error::invalid_path(target));
    };

    if meta.is_file() {
        if is_markdown(target) {
            return Ok(vec![target.to_path_buf()]);
        }
        return Err(Error::invalid_path(target));
    }

    if !meta.is_dir() {
        return Err(Error::invalid_path(target));
    }

    let mut files = Vec::new();
    let mut walker = WalkDir::new(target);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result.map_err(Error::io)?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(files)
}
