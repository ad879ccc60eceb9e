//! Ignore-pattern matching against root-relative paths

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::utils::relative_slash_path;

/// Glob options used for every pattern: `*` and `?` stop at `/`.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single compiled ignore rule.
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    /// Pattern written with a trailing `/`, stored without it.
    /// Matches any relative path that starts with this string.
    DirPrefix(String),
    /// Shell glob matched against the whole relative path.
    Glob(Pattern),
    /// Pattern that is not a valid glob; matches by exact equality.
    Literal(String),
}

impl IgnorePattern {
    pub fn parse(raw: &str) -> Self {
        if let Some(prefix) = raw.strip_suffix('/') {
            return IgnorePattern::DirPrefix(prefix.to_string());
        }
        match Pattern::new(&collapse_stars(raw)) {
            Ok(p) => IgnorePattern::Glob(p),
            Err(e) => {
                log::warn!(
                    "ignore pattern '{}' is not a valid glob ({}), matching literally",
                    raw,
                    e
                );
                IgnorePattern::Literal(raw.to_string())
            }
        }
    }

    /// Check this pattern against a `/`-separated root-relative path.
    pub fn matches(&self, rel: &str) -> bool {
        match self {
            IgnorePattern::DirPrefix(prefix) => rel.starts_with(prefix.as_str()),
            IgnorePattern::Glob(p) => p.matches_with(rel, GLOB_OPTIONS),
            IgnorePattern::Literal(s) => rel == s.as_str(),
        }
    }
}

/// Collapse each run of `*` into one.
///
/// `glob` gives `**` recursive meaning (crossing `/`) and rejects it next to
/// other characters. Here `**` is just `*`, confined to one path component.
fn collapse_stars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Decides which paths under a scan root are excluded.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    root: PathBuf,
    patterns: Vec<IgnorePattern>,
}

impl IgnoreFilter {
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Self {
        Self {
            root: root.to_path_buf(),
            patterns: patterns
                .iter()
                .map(|p| IgnorePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// True if any pattern matches `path`. Paths outside the root never match.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(rel) = relative_slash_path(path, &self.root) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(&rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> IgnoreFilter {
        IgnoreFilter::new(Path::new("/project"), patterns)
    }

    fn ignored(f: &IgnoreFilter, rel: &str) -> bool {
        f.is_ignored(&Path::new("/project").join(rel))
    }

    #[test]
    fn test_dir_prefix_matches_directory() {
        let f = filter(&["build/"]);
        assert!(ignored(&f, "build"));
        assert!(!ignored(&f, "src"));
    }

    #[test]
    fn test_dir_prefix_is_plain_string_prefix() {
        // No component boundary check: "build/" also excludes "builder.rs"
        let f = filter(&["build/"]);
        assert!(ignored(&f, "builder.rs"));
        assert!(ignored(&f, "build_tools"));
        assert!(!ignored(&f, "src/build"));
    }

    #[test]
    fn test_nested_dir_prefix() {
        let f = filter(&["src/generated/"]);
        assert!(ignored(&f, "src/generated"));
        assert!(!ignored(&f, "src"));
    }

    #[test]
    fn test_glob_does_not_cross_separator() {
        let f = filter(&["*.log"]);
        assert!(ignored(&f, "debug.log"));
        assert!(!ignored(&f, "build/output.log"));

        let nested = filter(&["*/*.log"]);
        assert!(ignored(&nested, "build/output.log"));
        assert!(!ignored(&nested, "debug.log"));
        assert!(!ignored(&nested, "a/b/output.log"));
    }

    #[test]
    fn test_glob_matches_whole_path() {
        let f = filter(&["node_modules"]);
        assert!(ignored(&f, "node_modules"));
        assert!(!ignored(&f, "web/node_modules"));
    }

    #[test]
    fn test_glob_wildcards_and_classes() {
        let f = filter(&["test?.rs", "[abc].txt", "[!x]y"]);
        assert!(ignored(&f, "test1.rs"));
        assert!(!ignored(&f, "test12.rs"));
        assert!(ignored(&f, "b.txt"));
        assert!(!ignored(&f, "d.txt"));
        assert!(ignored(&f, "zy"));
        assert!(!ignored(&f, "xy"));
    }

    #[test]
    fn test_glob_is_case_sensitive() {
        let f = filter(&["*.TMP"]);
        assert!(ignored(&f, "a.TMP"));
        assert!(!ignored(&f, "a.tmp"));
    }

    #[test]
    fn test_star_matches_hidden_files() {
        let f = filter(&["*.swp"]);
        assert!(ignored(&f, ".main.rs.swp"));
    }

    #[test]
    fn test_double_star_stays_within_component() {
        let f = filter(&["**/*.log"]);
        assert!(ignored(&f, "a/c.log"));
        assert!(!ignored(&f, "a/b/c.log"));
        assert!(!ignored(&f, "c.log"));

        let bare = filter(&["**"]);
        assert!(ignored(&bare, "src"));
        assert!(!ignored(&bare, "src/main.rs"));
    }

    #[test]
    fn test_double_star_inside_name_acts_as_star() {
        let f = filter(&["a**"]);
        assert!(ignored(&f, "abc"));
        assert!(ignored(&f, "a"));
        assert!(!ignored(&f, "a/bc"));
    }

    #[test]
    fn test_collapse_stars() {
        assert_eq!(collapse_stars("**/*.log"), "*/*.log");
        assert_eq!(collapse_stars("a***b"), "a*b");
        assert_eq!(collapse_stars("plain?.rs"), "plain?.rs");
    }

    #[test]
    fn test_invalid_glob_matches_literally() {
        let f = filter(&["[oops"]);
        assert!(ignored(&f, "[oops"));
        assert!(!ignored(&f, "oops"));
    }

    #[test]
    fn test_no_patterns_ignores_nothing() {
        let f = filter(&[]);
        assert!(!ignored(&f, "anything"));
    }

    #[test]
    fn test_path_outside_root_not_ignored() {
        let f = filter(&["*"]);
        assert!(!f.is_ignored(Path::new("/elsewhere/file")));
    }
}
