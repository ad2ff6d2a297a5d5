//! Append-only chat transcript.

use crate::types::Message;

/// Messages of one chat session, oldest first.
///
/// Entries are only ever appended. Clearing happens by replacing the whole
/// transcript when the chat page is re-entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its index.
    pub fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;

    #[test]
    fn push_appends_in_order() {
        let mut t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.push(Message::ai("hello")), 0);
        assert_eq!(t.push(Message::user("hi")), 1);

        let senders: Vec<Sender> = t.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Ai, Sender::User]);
        assert_eq!(t.last().map(|m| m.text.as_str()), Some("hi"));
        assert_eq!(t.len(), 2);
    }
}
