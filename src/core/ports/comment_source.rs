//! Comment source port
//!
//! Defines the interface for retrieving raw comment bodies.

/// A raw comment as retrieved from its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Where the comment came from (file path, URL, issue comment ID)
    pub origin: String,
    /// Comment text, unmodified
    pub body: String,
}

impl Comment {
    /// Create a comment
    #[must_use]
    pub fn new(origin: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            body: body.into(),
        }
    }
}

/// Supplier of raw comments
///
/// Implementations handle retrieval (files, stdin, an issue tracker API).
/// Timeouts and retries belong to the implementation, not to extraction.
pub trait CommentSource {
    /// Fetch every comment this source provides
    fn comments(&self) -> anyhow::Result<Vec<Comment>>;

    /// Fetch only comments that follow the template
    fn templated(&self, detect: impl Fn(&str) -> bool) -> anyhow::Result<Vec<Comment>>
    where
        Self: Sized,
    {
        Ok(self.comments()?.into_iter().filter(|c| detect(&c.body)).collect())
    }
}
