use regex::{Regex, RegexBuilder};

use crate::model::prompt::Prompt;

/// Upper bound on the compiled size of a user-typed pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiles the raw search text into a case-insensitive pattern.
pub fn build_matcher(raw: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(raw)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

fn matches(matcher: &Regex, prompt: &Prompt) -> bool {
    matcher.is_match(&prompt.creator.username)
        || prompt.tags().any(|tag| matcher.is_match(tag))
        || matcher.is_match(&prompt.prompt_text)
}

/// Keeps the prompts whose creator username, any single tag, or prompt text
/// matches `raw`. Input order is preserved. An empty `raw` keeps everything;
/// a pattern that does not compile keeps nothing.
///
/// `raw` is a regular expression, not a literal: plain words behave as a
/// substring search, but `a.b` also matches "axb".
pub fn filter_prompts(prompts: &[Prompt], raw: &str) -> Vec<Prompt> {
    let matcher = match build_matcher(raw) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("search pattern {raw:?} rejected: {e}");
            return vec![];
        }
    };

    prompts
        .iter()
        .filter(|p| matches(&matcher, p))
        .cloned()
        .collect()
}

/// Keeps the prompts carrying `tag` exactly, ignoring case.
pub fn filter_by_tag(prompts: &[Prompt], tag: &str) -> Vec<Prompt> {
    prompts.iter().filter(|p| p.has_tag(tag)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prompt::Creator;

    fn prompt(id: &str, username: &str, text: &str, tags: &str) -> Prompt {
        Prompt {
            id: id.into(),
            prompt_text: text.into(),
            tag_line: tags.into(),
            creator: Creator {
                id: format!("u-{username}"),
                username: username.into(),
                email: String::new(),
                image_url: String::new(),
            },
        }
    }

    fn sample() -> Vec<Prompt> {
        vec![
            prompt("1", "alice", "Draw a cat in watercolor", "art painting"),
            prompt("2", "bob", "Explain closures in Rust", "code rust"),
            prompt("3", "Catherine", "Plan a weekend trip", "travel"),
            prompt("4", "dave", "Write a poem", "AI  writing"),
        ]
    }

    fn ids(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_text_matches_everything_in_order() {
        let all = sample();
        assert_eq!(ids(&filter_prompts(&all, "")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn matches_username_tag_or_text() {
        let all = sample();
        // "cat" hits alice's text and Catherine's username.
        assert_eq!(ids(&filter_prompts(&all, "cat")), vec!["1", "3"]);
        assert_eq!(ids(&filter_prompts(&all, "rust")), vec!["2"]);
        assert_eq!(ids(&filter_prompts(&all, "travel")), vec!["3"]);
    }

    #[test]
    fn search_ignores_case() {
        let all = sample();
        assert_eq!(ids(&filter_prompts(&all, "BOB")), vec!["2"]);
        // "painting", "Explain" and the "AI" tag.
        assert_eq!(ids(&filter_prompts(&all, "ai")), vec!["1", "2", "4"]);
    }

    #[test]
    fn tag_match_is_per_tag() {
        let all = vec![prompt("1", "x", "nothing here", "art painting")];
        // Would only match across the joined string, never a single tag.
        assert!(filter_prompts(&all, "art painting").is_empty());
        assert_eq!(ids(&filter_prompts(&all, "paint")), vec!["1"]);
    }

    #[test]
    fn malformed_pattern_yields_nothing() {
        let all = sample();
        assert!(filter_prompts(&all, "((").is_empty());
        assert!(filter_prompts(&all, "[a-").is_empty());
    }

    #[test]
    fn pattern_syntax_is_honoured() {
        let all = sample();
        assert_eq!(ids(&filter_prompts(&all, "^bo")), vec!["2"]);
        let dotted = vec![prompt("1", "x", "axb", "")];
        assert_eq!(ids(&filter_prompts(&dotted, "a.b")), vec!["1"]);
        assert!(filter_prompts(&dotted, "(really").is_empty());
    }

    #[test]
    fn tag_filter_is_exact() {
        let all = sample();
        assert_eq!(ids(&filter_by_tag(&all, "ai")), vec!["4"]);
        assert!(filter_by_tag(&all, "A").is_empty());
        assert!(filter_by_tag(&all, "paint").is_empty());
        assert_eq!(ids(&filter_by_tag(&all, "ART")), vec!["1"]);
    }
}
