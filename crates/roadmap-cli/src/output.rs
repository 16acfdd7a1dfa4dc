//! Artifact file naming and writing

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("slug pattern is valid"));

/// Lowercase topic with runs of non-alphanumeric characters collapsed to `_`
///
/// Letters and digits of any script are kept.
#[must_use]
pub fn slug(topic: &str) -> String {
    let lower = topic.trim().to_lowercase();
    let collapsed = NON_ALNUM_RUN.replace_all(&lower, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        "roadmap".to_string()
    } else {
        trimmed.to_string()
    }
}

/// JSON and HTML artifact paths for `topic` under `dir`
#[must_use]
pub fn artifact_paths(dir: &Path, topic: &str) -> (PathBuf, PathBuf) {
    let stem = format!("{}_roadmap", slug(topic));
    (
        dir.join(format!("{stem}.json")),
        dir.join(format!("{stem}.html")),
    )
}

/// Write `contents` to `path`, creating parent directories
pub fn write_artifact(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
