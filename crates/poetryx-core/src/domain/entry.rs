//! The canonical entry-point stub written into a fresh package.

/// Canonical `__init__.py` content for a newly scaffolded project.
///
/// Written only when the entry file is missing or empty; a file with any
/// existing content is left untouched to protect user edits.
pub const DEFAULT_ENTRY_SOURCE: &str = "\
def main() -> None:
    pass

if __name__ == \"__main__\":
    main()
";

/// Whether the entry file should be (re)created.
///
/// `existing` is `None` when the file is missing; an empty string counts the
/// same as missing.
pub fn needs_initialization(existing: Option<&str>) -> bool {
    match existing {
        Some(content) => content.is_empty(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_ends_with_single_newline() {
        assert!(DEFAULT_ENTRY_SOURCE.ends_with("main()\n"));
        assert!(!DEFAULT_ENTRY_SOURCE.ends_with("\n\n"));
    }

    #[test]
    fn missing_and_empty_files_are_eligible() {
        assert!(needs_initialization(None));
        assert!(needs_initialization(Some("")));
    }

    #[test]
    fn any_content_protects_the_file() {
        assert!(!needs_initialization(Some("x")));
        assert!(!needs_initialization(Some(DEFAULT_ENTRY_SOURCE)));
    }
}
