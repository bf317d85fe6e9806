//! Message collection with duplicate suppression

use std::collections::BTreeSet;

/// Ordered list of user-facing messages.
///
/// Pushing a message that is already present is a no-op, so the list never
/// holds duplicates. The first occurrence keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageList {
    messages: Vec<String>,
    seen: BTreeSet<String>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Returns false when it was already in the list.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !self.seen.insert(message.clone()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}

impl<S: Into<String>> FromIterator<S> for MessageList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for message in iter {
            list.push(message);
        }
        list
    }
}

/// Remove duplicates from a list of messages, keeping first occurrences.
pub fn dedup_messages<S: Into<String>>(messages: impl IntoIterator<Item = S>) -> Vec<String> {
    messages.into_iter().collect::<MessageList>().into_vec()
}
