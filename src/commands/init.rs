//! Write a default configuration file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bugform::config::Config;
use bugform::output::{OperationResult, OutputMode};

/// Write the built-in template anchors to a config file
///
/// Uses `path` if given, else the user-level config path.
pub fn init(path: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default_path().context("cannot determine user config directory")?,
    };

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = format!("# bugform configuration\n\n{}", Config::default().to_toml()?);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
