/// Keywords that must all appear in a chat message to fire the status relay.
///
/// Matching is case-sensitive and order-independent: each keyword may appear
/// anywhere in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    keywords: Vec<String>,
}

pub fn default_keywords() -> Vec<String> {
    vec!["hello".to_string(), "rasp".to_string()]
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

impl Trigger {
    /// Returns `None` when `keywords` is empty or holds an empty keyword,
    /// either of which would match every message.
    pub fn new(keywords: Vec<String>) -> Option<Self> {
        if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
            return None;
        }
        Some(Self { keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().all(|k| text.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_both_keywords_in_either_order() {
        let t = Trigger::default();
        assert!(t.matches("hello rasp"));
        assert!(t.matches("rasp hello"));
        assert!(t.matches("well hello there, how is the raspberry?"));
    }

    #[test]
    fn requires_every_keyword() {
        let t = Trigger::default();
        assert!(!t.matches("rasp"));
        assert!(!t.matches("hello"));
        assert!(!t.matches(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let t = Trigger::default();
        assert!(!t.matches("Hello Rasp"));
        assert!(!t.matches("HELLO RASP"));
    }

    #[test]
    fn custom_keywords() {
        let t = Trigger::new(vec!["status".into()]).unwrap();
        assert!(t.matches("pi status please"));
        assert!(!t.matches("hello rasp"));
    }

    #[test]
    fn empty_keywords_are_rejected() {
        assert!(Trigger::new(vec![]).is_none());
        assert!(Trigger::new(vec!["hello".into(), String::new()]).is_none());
    }
}
