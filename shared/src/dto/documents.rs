//! # Document Data Transfer Objects
//!
//! Structures stored in the document service, keyed by account id. Every
//! account owns exactly one `UserProfile` in the `users` collection and one
//! `ChatIndex` in the `userChats` collection; both are written during
//! registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile document for one account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Account id, identical to the document key
    pub id: String,
    pub username: String,
    pub email: String,
    /// Public URL of the uploaded avatar image
    pub avatar: String,
    /// Account ids this user has blocked
    pub blocked: Vec<String>,
}

/// Per-account index of conversations, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatIndex {
    pub chats: Vec<ChatSummary>,
}

/// One conversation entry in a [`ChatIndex`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSummary {
    pub chat_id: String,
    /// The other participant's account id
    pub receiver_id: String,
    pub last_message: String,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_index_starts_empty() {
        let index = ChatIndex::default();
        assert!(index.chats.is_empty());

        let json = serde_json::to_value(&index).expect("serializable");
        assert_eq!(json, serde_json::json!({ "chats": [] }));
    }

    #[test]
    fn user_profile_wire_fields() {
        let profile = UserProfile {
            id: "u-42".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            avatar: "https://cdn.example.com/avatars/u-42.png".to_string(),
            blocked: Vec::new(),
        };

        let json = serde_json::to_value(&profile).expect("serializable");
        assert_eq!(json["id"], "u-42");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["avatar"], "https://cdn.example.com/avatars/u-42.png");
        assert_eq!(json["blocked"], serde_json::json!([]));
    }
}
