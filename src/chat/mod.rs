pub mod responder;
pub mod script;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MessageKind {
    #[default]
    Normal,
    /// The user tapped one of the canned suggestion buttons instead of typing.
    Suggestion,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(id: u64, text: String, sender: Sender, kind: MessageKind) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Short time for display, e.g. "14:07".
    pub fn time_short(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Transcript of one support chat. Append-only: messages are never edited or
/// removed, ids grow from 1 in insertion order.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str, kind: MessageKind) -> &ChatMessage {
        self.push(text.to_string(), Sender::User, kind)
    }

    pub fn push_assistant(&mut self, text: &str) -> &ChatMessage {
        self.push(text.to_string(), Sender::Assistant, MessageKind::Normal)
    }

    fn push(&mut self, text: String, sender: Sender, kind: MessageKind) -> &ChatMessage {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(ChatMessage::new(id, text, sender, kind));
        self.messages.last().unwrap()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_insertion_order_with_growing_ids() {
        let mut log = MessageLog::new();
        log.push_assistant("привет");
        log.push_user("как создать проект?", MessageKind::Normal);
        log.push_assistant("вот так");

        let ids: Vec<u64> = log.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(log.messages()[0].sender, Sender::Assistant);
        assert_eq!(log.messages()[1].sender, Sender::User);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn suggestion_kind_is_recorded() {
        let mut log = MessageLog::new();
        let entry = log.push_user("Где найти отчёты?", MessageKind::Suggestion);
        assert_eq!(entry.kind, MessageKind::Suggestion);
        assert_eq!(entry.text, "Где найти отчёты?");
    }

    #[test]
    fn short_time_is_hours_and_minutes() {
        let mut log = MessageLog::new();
        let stamp = log.push_assistant("привет").time_short();
        assert_eq!(stamp.len(), 5);
        assert_eq!(stamp.chars().nth(2), Some(':'));
    }

    #[test]
    fn fresh_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.messages().is_empty());
    }
}
