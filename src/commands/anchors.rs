//! Show the active section anchors

use bugform::config::Config;
use bugform::output::{AnchorsResult, OutputMode};

/// Print the anchors extraction will split on
pub fn anchors(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let anchors = config.anchors()?;
    AnchorsResult {
        anchors: anchors.as_slice().to_vec(),
    }
    .render(mode);
    Ok(())
}
