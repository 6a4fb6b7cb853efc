//! Write or verify the generated files under a source tree root.

use crate::error::Error;
use crate::model::PropertyConfig;
use crate::render;
use crate::targets::{GeneratedFile, GENERATED_FILES};
use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Render every generated file, paired with its absolute path.
fn render_all(root: &Path, configs: &[PropertyConfig]) -> Vec<(PathBuf, String)> {
    GENERATED_FILES
        .iter()
        .map(|target: &GeneratedFile| {
            let content = render::render(configs, &target.layout);
            (root.join(target.relative_path()), content)
        })
        .collect()
}

/// Overwrite the generated files with freshly rendered content.
pub fn write_all(root: &Path, configs: &[PropertyConfig]) -> Result<()> {
    let rendered = render_all(root, configs);

    for (path, content) in &rendered {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}", path.display());
    }

    info!(
        "generated {} files from {} properties",
        rendered.len(),
        configs.len()
    );
    Ok(())
}

/// Render into scratch files and compare them with the committed ones.
///
/// Returns [`Error::GenerationMismatch`] listing every stale file. Scratch
/// files are removed when they go out of scope, on every path out of here.
pub fn check_all(root: &Path, configs: &[PropertyConfig]) -> Result<()> {
    let rendered = render_all(root, configs);

    let mut stale = Vec::new();
    for (path, content) in rendered {
        let mut scratch = NamedTempFile::new().context("failed to create scratch file")?;
        scratch
            .write_all(content.as_bytes())
            .with_context(|| format!("failed to write scratch file for {}", path.display()))?;

        if files_match(scratch.path(), &path)? {
            debug!("up to date: {}", path.display());
        } else {
            debug!("needs update: {}", path.display());
            stale.push(path);
        }
    }

    if !stale.is_empty() {
        return Err(Error::GenerationMismatch {
            stale,
            command: regenerate_command(root),
        }
        .into());
    }

    info!("all generated files are up to date");
    Ok(())
}

/// Byte-for-byte comparison. A committed file that does not exist never matches.
fn files_match(scratch: &Path, committed: &Path) -> Result<bool> {
    let committed_bytes = match fs::read(committed) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", committed.display()))
        }
    };
    let scratch_bytes = fs::read(scratch)
        .with_context(|| format!("failed to read {}", scratch.display()))?;
    Ok(scratch_bytes == committed_bytes)
}

fn regenerate_command(root: &Path) -> String {
    format!(
        "{} --android-build-top {}",
        env!("CARGO_PKG_NAME"),
        root.display()
    )
}
