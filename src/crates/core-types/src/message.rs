use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One chat entry. Created on submit or on reveal, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl Message {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            created_at: Local::now(),
        }
    }

    /// Clock-face timestamp shown next to chat bubbles ("10:32 AM").
    pub fn clock_label(&self) -> String {
        self.created_at.format("%I:%M %p").to_string()
    }
}
