use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::domain::table::Dataset;

/// Writes a section's dataset as a pretty-printed JSON array, in one shot.
/// The output directory is created on demand.
pub fn persist_dataset(
    output_dir: &Path,
    file_name: &str,
    dataset: &Dataset,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let path = output_dir.join(file_name);
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}
