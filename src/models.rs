//! Data types shared by the completion adapter, the parser and the web layer

use serde::{Deserialize, Serialize};

/// A city name as typed by the user. No validation is applied; empty is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityQuery {
    pub name: String,
}

impl CityQuery {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Landmarks and activities extracted from a completion, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub landmarks: Vec<String>,
    pub activities: Vec<String>,
}

impl CityInfo {
    /// Both lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty() && self.activities.is_empty()
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One chat completion call: a model identifier and the ordered conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_serializes_lowercase() {
        let message = ChatMessage::system("be helpful");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be helpful");
    }

    #[test]
    fn test_city_info_default_is_empty() {
        assert!(CityInfo::default().is_empty());
    }
}
