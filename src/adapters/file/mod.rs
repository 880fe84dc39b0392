//! File-based comment source
//!
//! Implements `CommentSource` over files on disk, with `-` meaning stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::ports::{Comment, CommentSource};

/// Path that stands for standard input
pub const STDIN: &str = "-";

/// Reads one comment per file
#[derive(Debug, Clone, Default)]
pub struct FileCommentSource {
    paths: Vec<PathBuf>,
}

impl FileCommentSource {
    /// Create a source over the given paths; no paths means stdin
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn read(path: &Path) -> anyhow::Result<Comment> {
        if path.as_os_str() == STDIN {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body).context("failed to read stdin")?;
            return Ok(Comment::new("<stdin>", body));
        }

        let body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Comment::new(path.display().to_string(), body))
    }
}

impl CommentSource for FileCommentSource {
    fn comments(&self) -> anyhow::Result<Vec<Comment>> {
        if self.paths.is_empty() {
            return Ok(vec![Self::read(Path::new(STDIN))?]);
        }
        self.paths.iter().map(|path| Self::read(path)).collect()
    }
}
