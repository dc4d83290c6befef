//! Pure gitignore-dialect pattern matching.
//!
//! [`IgnoreRules`] is a compiled view of an ignore file's pattern lines. It
//! never touches the filesystem: callers read the file, hand the content
//! here, and ask whether a candidate path is already covered. This keeps the
//! membership test unit-testable in isolation.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::debug;

/// Compiled ignore patterns with full gitignore semantics: glob wildcards,
/// trailing-slash directory anchors, and `!` negation lines. A path counts
/// as ignored only if the last matching rule in file order is a positive
/// (non-negated) match.
#[derive(Debug)]
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Compile the lines of an ignore file.
    ///
    /// Lines that are not valid patterns are skipped, mirroring how git
    /// itself treats them.
    pub fn parse(content: &str) -> Self {
        let mut builder = GitignoreBuilder::new("");
        for line in content.lines() {
            if builder.add_line(None, line).is_err() {
                debug!(pattern = line, "skipping invalid ignore pattern");
            }
        }
        let matcher = builder.build().unwrap_or_else(|_| Gitignore::empty());
        Self { matcher }
    }

    /// Whether `candidate` — treated as a directory path relative to the
    /// project root — is already ignored by these rules.
    ///
    /// The test is always evaluated against the candidate being added, never
    /// against the ignore file's own location.
    pub fn is_ignored(&self, candidate: &str) -> bool {
        self.matcher.matched(candidate, true).is_ignore()
    }
}
