//! Conversation - Model

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use uuid::Uuid;

/// Who produced a message entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    User,
    Bot,
    System,
}

impl MessageRole {
    /// Style class of the message block, paired with the shared `message` class.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageRole::User => "user-message",
            MessageRole::Bot => "bot-message",
            MessageRole::System => "system-message",
        }
    }
}

/// Evidence snippets attached to a bot answer. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    chunks: Vec<String>,
}

impl Evidence {
    /// `None` for an empty sequence: empty evidence is not rendered at all.
    pub fn new(chunks: Vec<String>) -> Option<Self> {
        if chunks.is_empty() {
            None
        } else {
            Some(Self { chunks })
        }
    }

    /// Number of snippets; at least one.
    pub fn count(&self) -> usize {
        self.chunks.len()
    }

    /// Display text: every chunk labelled with its 1-based position and
    /// followed by a blank line.
    pub fn display_text(&self) -> String {
        self.chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| format!("[Chunk {}]:\n{}\n\n", i + 1, chunk))
            .collect()
    }
}

/// One rendered unit of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    id: Uuid,
    role: MessageRole,
    text: String,
    evidence: Option<Evidence>,
    created_at: DateTime<Utc>,
}

impl MessageEntry {
    fn new(role: MessageRole, text: String, evidence: Option<Evidence>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text,
            evidence,
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text.into(), None)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageRole::System, text.into(), None)
    }

    pub fn bot(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self::new(MessageRole::Bot, answer.into(), Evidence::new(sources))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn evidence(&self) -> Option<&Evidence> {
        self.evidence.as_ref()
    }

    /// Local wall-clock time, shown as the bubble's tooltip.
    pub fn time_label(&self) -> String {
        format_time(&self.created_at.with_timezone(&Local))
    }
}

/// Append-only, ordered message log. Entries cannot be removed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    entries: Vec<MessageEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> Uuid {
        self.push(MessageEntry::user(text))
    }

    pub fn push_bot(&mut self, answer: impl Into<String>, sources: Vec<String>) -> Uuid {
        self.push(MessageEntry::bot(answer, sources))
    }

    pub fn push_system(&mut self, text: impl Into<String>) -> Uuid {
        self.push(MessageEntry::system(text))
    }

    fn push(&mut self, entry: MessageEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Visibility of one evidence panel. Starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    revealed: bool,
}

impl Disclosure {
    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Format a timestamp as `HH:MM`
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_display_text() {
        let evidence = Evidence::new(vec![
            "Section 9.1 text...".to_string(),
            "Section 9.2 text...".to_string(),
        ])
        .unwrap();
        assert_eq!(
            evidence.display_text(),
            "[Chunk 1]:\nSection 9.1 text...\n\n[Chunk 2]:\nSection 9.2 text...\n\n"
        );
    }

    #[test]
    fn test_evidence_keeps_duplicates_and_order() {
        let evidence = Evidence::new(vec!["b".into(), "a".into(), "b".into()]).unwrap();
        assert_eq!(evidence.count(), 3);
        assert_eq!(evidence.display_text(), "[Chunk 1]:\nb\n\n[Chunk 2]:\na\n\n[Chunk 3]:\nb\n\n");
    }

    #[test]
    fn test_empty_evidence_is_absent() {
        assert!(Evidence::new(Vec::new()).is_none());
        assert!(MessageEntry::bot("answer", Vec::new()).evidence().is_none());
    }

    #[test]
    fn test_only_bot_entries_carry_evidence() {
        let bot = MessageEntry::bot("answer", vec!["chunk".into()]);
        assert_eq!(bot.role(), MessageRole::Bot);
        assert_eq!(bot.evidence().map(|e| e.count()), Some(1));

        assert!(MessageEntry::user("q").evidence().is_none());
        assert!(MessageEntry::system("Error: x").evidence().is_none());
    }

    #[test]
    fn test_role_classes() {
        assert_eq!(MessageRole::User.css_class(), "user-message");
        assert_eq!(MessageRole::Bot.css_class(), "bot-message");
        assert_eq!(MessageRole::System.css_class(), "system-message");
    }

    #[test]
    fn test_log_appends_in_order() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());

        let first = log.push_user("hello");
        let second = log.push_bot("hi", Vec::new());
        let third = log.push_system("Error: nope");

        let ids: Vec<_> = log.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().last().map(|e| e.text()), Some("Error: nope"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_disclosure_parity() {
        let mut disclosure = Disclosure::default();
        assert!(!disclosure.is_revealed());

        for n in 1..=7 {
            disclosure.toggle();
            assert_eq!(disclosure.is_revealed(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_disclosures_are_independent() {
        let mut first = Disclosure::default();
        let second = Disclosure::default();
        assert!(first.toggle());
        assert!(!second.is_revealed());
    }

    #[test]
    fn test_format_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_time(&dt), "14:02");
    }
}
