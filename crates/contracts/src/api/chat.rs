use serde::{Deserialize, Serialize};

/// POST target for a chat turn, relative to the API base.
pub const CHAT_PATH: &str = "/chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Acknowledged chat reply.
///
/// `sources` holds the retrieved evidence snippets in retrieval order. The
/// server may omit the field entirely, which reads as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl ChatAnswer {
    pub fn new(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: Some(sources),
        }
    }

    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::to_string(&ChatRequest::new("What is the termination clause?")).unwrap();
        assert_eq!(json, r#"{"query":"What is the termination clause?"}"#);
    }

    #[test]
    fn test_answer_with_sources() {
        let answer: ChatAnswer = serde_json::from_str(
            r#"{"answer":"Clause 9 governs termination.","sources":["Section 9.1 text...","Section 9.2 text..."]}"#,
        )
        .unwrap();
        assert_eq!(answer.answer, "Clause 9 governs termination.");
        assert_eq!(answer.sources().len(), 2);
        assert_eq!(answer.sources()[1], "Section 9.2 text...");
    }

    #[test]
    fn test_answer_without_sources() {
        let missing: ChatAnswer = serde_json::from_str(r#"{"answer":"No idea."}"#).unwrap();
        assert!(missing.sources().is_empty());

        let null: ChatAnswer = serde_json::from_str(r#"{"answer":"No idea.","sources":null}"#).unwrap();
        assert!(null.sources().is_empty());
    }

    #[test]
    fn test_answer_requires_answer_field() {
        assert!(serde_json::from_str::<ChatAnswer>(r#"{"sources":[]}"#).is_err());
    }
}
