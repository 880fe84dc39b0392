//! Extract reports from comments

use std::path::PathBuf;

use bugform::adapters::file::FileCommentSource;
use bugform::config::Config;
use bugform::core::ports::CommentSource;
use bugform::core::services::Extractor;
use bugform::output::{OutputMode, ParseResult};

/// Extract a report from each comment and render it
///
/// In strict mode, any field error makes the command fail after every
/// comment has been rendered.
pub fn parse(
    files: Vec<PathBuf>,
    strict: bool,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let extractor = Extractor::new(config.anchors()?);
    let source = FileCommentSource::new(files);

    let mut invalid = 0;
    for comment in source.comments()? {
        let template_found = extractor.detect(&comment.body);
        if !template_found {
            log::warn!("{}: bug template not found", comment.origin);
        }

        let extraction = extractor.extract(&comment.body);
        let result = ParseResult::new(comment.origin, template_found, extraction);
        if !result.valid {
            invalid += 1;
        }
        result.render(mode);
    }

    if strict && invalid > 0 {
        anyhow::bail!("{invalid} comment(s) with field errors");
    }

    Ok(())
}
