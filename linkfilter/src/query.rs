use regex::{Regex, RegexBuilder};

/// Case-insensitive literal substring matcher built from the input text.
#[derive(Debug, Clone)]
pub enum Query {
    /// Blank input; every item matches.
    All,
    Pattern(Regex),
    /// Fallback when the escaped pattern exceeds the regex size limit.
    Literal(String),
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Query::All;
        }

        match RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Query::Pattern(re),
            Err(err) => {
                log::debug!("[query] falling back to literal match: {err}");
                Query::Literal(text.to_lowercase())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Query::All)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Query::All => true,
            Query::Pattern(re) => re.is_match(haystack),
            Query::Literal(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_matches_everything() {
        assert!(Query::new("").matches("anything"));
        assert!(Query::new("  \t ").is_empty());
    }

    #[test]
    fn substring_is_case_insensitive_and_trimmed() {
        let q = Query::new("  aN ");
        assert!(q.matches("Banana"));
        assert!(q.matches("ANT"));
        assert!(!q.matches("Grape"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let q = Query::new("a.b");
        assert!(q.matches("a.b"));
        assert!(!q.matches("axb"));

        for raw in ["(", "[x]", "a+", "^$", "a|b", "\\", "{1}", "c++", "/x/", "-?*"] {
            let q = Query::new(raw);
            assert!(q.matches(&format!("pre {raw} post")), "{raw}");
        }
        assert!(!Query::new("a|b").matches("a"));
    }

    #[test]
    fn unicode_case_folding() {
        assert!(Query::new("ÉCOLE").matches("une école"));
    }
}
