//! Detect whether comments follow the bug template

use std::path::PathBuf;

use bugform::adapters::file::FileCommentSource;
use bugform::config::Config;
use bugform::core::ports::CommentSource;
use bugform::core::services::Extractor;
use bugform::output::{DetectResult, OutputMode};

/// Report, per comment, whether the template is present
///
/// Exits with status 1 if any comment lacks the template.
pub fn detect(files: Vec<PathBuf>, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let extractor = Extractor::new(config.anchors()?);
    let source = FileCommentSource::new(files);

    let mut all_found = true;
    for comment in source.comments()? {
        let result = DetectResult {
            template_found: extractor.detect(&comment.body),
            origin: comment.origin,
        };
        all_found &= result.template_found;
        result.render(mode);
    }

    if !all_found {
        std::process::exit(1);
    }

    Ok(())
}
