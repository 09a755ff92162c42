//! Collaboration panel: team chat with a canned AI teammate, plus the
//! static roster and change feed.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::responder::{dispatch, KeywordRule};
use crate::reveal::TimedRevealQueue;

pub const REPLY_DELAY: Duration = Duration::from_millis(1500);
/// Fresh messages pulse for this long after the reply lands.
pub const FLASH_WINDOW: Duration = Duration::from_millis(2000);

pub const AI_NAME: &str = "AI Assistant";
pub const SELF_NAME: &str = "You";

const TEAM_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["hello", "hi"],
        respond: |_| "Hello! How can I assist with your code today?",
    },
    KeywordRule {
        triggers: &["help", "problem"],
        respond: |_| "I'd be happy to help. Could you share more details about what you're working on?",
    },
    KeywordRule {
        triggers: &["bug", "error", "issue"],
        respond: |_| "Let's debug this. Have you checked the console for error messages?",
    },
    KeywordRule {
        triggers: &["feature", "implement"],
        respond: |_| "That sounds like an interesting feature. Let's break it down into smaller tasks.",
    },
];

const TEAM_FALLBACK: &str = "I see. Let me know if you need any specific help with your code.";

#[derive(Debug, Clone)]
pub struct CollabMessage {
    pub author: String,
    pub text: String,
    pub time_label: String,
    new_until: Option<Instant>,
}

impl CollabMessage {
    fn seeded(author: &str, text: &str, time_label: &str) -> Self {
        Self {
            author: author.to_string(),
            text: text.to_string(),
            time_label: time_label.to_string(),
            new_until: None,
        }
    }

    pub fn is_new(&self, now: Instant) -> bool {
        self.new_until.is_some_and(|until| now < until)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Commit,
    Branch,
    Merge,
}

#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub user: &'static str,
    pub kind: ChangeKind,
    pub message: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone)]
pub struct Collaborator {
    pub name: &'static str,
    pub avatar: &'static str,
    pub online: bool,
    pub last_active: &'static str,
}

pub const COLLABORATORS: &[Collaborator] = &[
    Collaborator {
        name: "Alex Chen",
        avatar: "A",
        online: true,
        last_active: "Now",
    },
    Collaborator {
        name: "Morgan Wu",
        avatar: "M",
        online: false,
        last_active: "2h ago",
    },
    Collaborator {
        name: AI_NAME,
        avatar: "AI",
        online: true,
        last_active: "Now",
    },
];

pub const CHANGES: &[ChangeEntry] = &[
    ChangeEntry {
        user: "Alex Chen",
        kind: ChangeKind::Commit,
        message: "Add authentication logic",
        time: "1h ago",
    },
    ChangeEntry {
        user: "Morgan Wu",
        kind: ChangeKind::Branch,
        message: "Created branch feature/ui-updates",
        time: "3h ago",
    },
    ChangeEntry {
        user: "System",
        kind: ChangeKind::Merge,
        message: "Merged PR #42: Fix login validation",
        time: "1d ago",
    },
];

#[derive(Debug)]
pub struct CollabChat {
    messages: Vec<CollabMessage>,
    pending: TimedRevealQueue<&'static str>,
}

impl CollabChat {
    pub fn new() -> Self {
        Self {
            messages: vec![
                CollabMessage::seeded(
                    "Alex Chen",
                    "I just pushed a new update to the function",
                    "10:30 AM",
                ),
                CollabMessage::seeded(
                    AI_NAME,
                    "I suggest optimizing the loop in line 23 for better performance",
                    "10:32 AM",
                ),
            ],
            pending: TimedRevealQueue::new(),
        }
    }

    pub fn messages(&self) -> &[CollabMessage] {
        &self.messages
    }

    pub fn is_replying(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn online_count(&self) -> usize {
        COLLABORATORS.iter().filter(|c| c.online).count()
    }

    /// Append the user's message and schedule the teammate reply.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_replying() {
            return false;
        }
        self.messages.push(CollabMessage {
            author: SELF_NAME.to_string(),
            text: trimmed.to_string(),
            time_label: Local::now().format("%I:%M %p").to_string(),
            // Stays fresh until the reply has flashed.
            new_until: Some(now + REPLY_DELAY + FLASH_WINDOW),
        });
        let reply = dispatch(TEAM_RULES, trimmed, TEAM_FALLBACK);
        self.pending.schedule_one(now, REPLY_DELAY, reply);
        true
    }

    pub fn poll(&mut self, now: Instant) {
        for reply in self.pending.poll(now) {
            self.messages.push(CollabMessage {
                author: AI_NAME.to_string(),
                text: reply.to_string(),
                time_label: Local::now().format("%I:%M %p").to_string(),
                new_until: Some(now + FLASH_WINDOW),
            });
        }
    }
}

impl Default for CollabChat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn reply_arrives_after_the_delay_and_flash_expires() {
        let clock = ManualClock::new();
        let mut chat = CollabChat::new();
        assert!(chat.send("hello there", clock.now()));
        assert_eq!(chat.messages().len(), 3);
        assert!(chat.messages()[2].is_new(clock.now()));

        clock.advance(REPLY_DELAY);
        chat.poll(clock.now());
        assert_eq!(chat.messages().len(), 4);
        let reply = &chat.messages()[3];
        assert_eq!(reply.author, AI_NAME);
        assert_eq!(reply.text, "Hello! How can I assist with your code today?");
        assert!(reply.is_new(clock.now()));

        clock.advance(FLASH_WINDOW);
        assert!(chat.messages().iter().all(|m| !m.is_new(clock.now())));
    }

    #[test]
    fn keyword_rules_pick_the_team_reply() {
        let clock = ManualClock::new();
        let mut chat = CollabChat::new();
        chat.send("there's a weird bug in the parser", clock.now());
        clock.advance(REPLY_DELAY);
        chat.poll(clock.now());
        assert_eq!(
            chat.messages().last().unwrap().text,
            "Let's debug this. Have you checked the console for error messages?"
        );
    }

    #[test]
    fn send_while_reply_pending_is_ignored() {
        let clock = ManualClock::new();
        let mut chat = CollabChat::new();
        chat.send("hi", clock.now());
        assert!(!chat.send("hi again", clock.now()));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn roster_counts_online_members() {
        let chat = CollabChat::new();
        assert_eq!(chat.online_count(), 2);
    }
}
