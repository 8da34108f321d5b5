use serde::{Deserialize, Serialize};

/// Author of a prompt, embedded in every prompt record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "image", default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "prompt")]
    pub prompt_text: String,
    /// Whitespace-joined tag list, as stored upstream.
    #[serde(rename = "tag", default)]
    pub tag_line: String,
    pub creator: Creator,
}

impl Prompt {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.tag_line)
    }

    /// Case-insensitive exact match against any of the prompt's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags().any(|t| t.to_lowercase() == wanted)
    }

    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.creator.id == user_id
    }
}

/// Splits a tag string on runs of whitespace. Empty pieces are dropped.
pub fn split_tags(raw: &str) -> std::str::SplitWhitespace<'_> {
    raw.split_whitespace()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of `GET /api/auth/session` when signed in; the endpoint answers `null` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(tags: &str) -> Prompt {
        Prompt {
            id: "p1".into(),
            prompt_text: "Write a haiku".into(),
            tag_line: tags.into(),
            creator: Creator {
                id: "u1".into(),
                username: "basho".into(),
                email: "basho@example.com".into(),
                image_url: String::new(),
            },
        }
    }

    #[test]
    fn double_space_collapses() {
        let tags: Vec<_> = split_tags("ai  writing").collect();
        assert_eq!(tags, vec!["ai", "writing"]);
    }

    #[test]
    fn blank_tag_string_has_no_tags() {
        assert_eq!(split_tags("   ").count(), 0);
        assert_eq!(split_tags("").count(), 0);
    }

    #[test]
    fn tabs_and_newlines_separate_tags() {
        let tags: Vec<_> = split_tags("\tart\nphoto ").collect();
        assert_eq!(tags, vec!["art", "photo"]);
    }

    #[test]
    fn has_tag_is_exact_and_case_insensitive() {
        let p = prompt("AI writing");
        assert!(p.has_tag("ai"));
        assert!(p.has_tag("WRITING"));
        assert!(!p.has_tag("A"));
        assert!(!p.has_tag("writ"));
    }

    #[test]
    fn decodes_wire_shape() {
        let raw = r#"{
            "_id": "65f0",
            "prompt": "Summarise this article",
            "tag": "summary  news",
            "creator": {
                "_id": "u9",
                "username": "ada",
                "email": "ada@example.com",
                "image": "https://example.com/ada.png"
            }
        }"#;
        let p: Prompt = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, "65f0");
        assert_eq!(p.prompt_text, "Summarise this article");
        assert_eq!(p.tags().collect::<Vec<_>>(), vec!["summary", "news"]);
        assert_eq!(p.creator.image_url, "https://example.com/ada.png");
        assert!(p.is_created_by("u9"));
    }

    #[test]
    fn missing_tag_field_defaults_to_empty() {
        let raw = r#"{"_id":"1","prompt":"x","creator":{"_id":"u","username":"n"}}"#;
        let p: Prompt = serde_json::from_str(raw).unwrap();
        assert_eq!(p.tags().count(), 0);
        assert_eq!(p.creator.email, "");
    }

    #[test]
    fn session_body_may_be_null() {
        let none: Option<Session> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());
        let some: Option<Session> =
            serde_json::from_str(r#"{"user":{"id":"u1","name":"Ada"}}"#).unwrap();
        assert_eq!(some.unwrap().user.id, "u1");
    }
}
