//! Command implementations

mod anchors;
mod detect;
mod init;
mod parse;

pub use anchors::anchors;
pub use detect::detect;
pub use init::init;
pub use parse::parse;
