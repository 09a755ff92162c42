//! AI assistant chat session.
//!
//! Submit appends the user message immediately and schedules the canned
//! reply behind a fixed latency window; while the reply is outstanding
//! the submit affordance stays disabled. Messages are never mutated,
//! only appended, and `clear` resets the list wholesale.

use std::time::{Duration, Instant};

use neoncode_core_types::{Message, MessageRole};
use tracing::debug;

use crate::responder::assistant_response;
use crate::reveal::TimedRevealQueue;

pub const GREETING: &str = "Hello! I'm your AI coding assistant. How can I help you today?";
pub const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: TimedRevealQueue<&'static str>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(MessageRole::Assistant, GREETING)],
            pending: TimedRevealQueue::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a reply is scheduled; drives the thinking indicator
    /// and gates further submits.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_pending()
    }

    /// Append the user message and schedule the reply. Blank input and
    /// submits while a reply is outstanding are no-ops.
    pub fn submit(&mut self, input: &str, now: Instant) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.is_thinking() {
            return false;
        }
        self.messages.push(Message::new(MessageRole::User, trimmed));
        let reply = assistant_response(trimmed);
        self.pending.schedule_one(now, RESPONSE_DELAY, reply);
        debug!(len = self.messages.len(), "chat submit");
        true
    }

    /// Reveal any reply whose delay has elapsed.
    pub fn poll(&mut self, now: Instant) {
        for text in self.pending.poll(now) {
            self.messages.push(Message::new(MessageRole::Assistant, text));
        }
    }

    /// Wholesale reset back to the greeting; cancels a pending reply.
    pub fn clear(&mut self) {
        self.pending.cancel();
        self.messages = vec![Message::new(MessageRole::Assistant, GREETING)];
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn submit_appends_user_entry_immediately_and_reply_after_delay() {
        let clock = ManualClock::new();
        let mut chat = ChatSession::new();
        assert_eq!(chat.messages().len(), 1);

        assert!(chat.submit("explain this", clock.now()));
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].role, MessageRole::User);
        assert!(chat.is_thinking());

        chat.poll(clock.now());
        assert_eq!(chat.messages().len(), 2);

        clock.advance(RESPONSE_DELAY);
        chat.poll(clock.now());
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[2].role, MessageRole::Assistant);
        assert!(!chat.is_thinking());
    }

    #[test]
    fn second_submit_while_thinking_adds_nothing() {
        let clock = ManualClock::new();
        let mut chat = ChatSession::new();
        chat.submit("optimize", clock.now());
        assert!(!chat.submit("explain", clock.now()));
        assert_eq!(chat.messages().len(), 2);

        clock.advance(RESPONSE_DELAY);
        chat.poll(clock.now());
        clock.advance(RESPONSE_DELAY);
        chat.poll(clock.now());
        // Exactly one generated entry for the one accepted submit.
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn blank_input_is_rejected_before_dispatch() {
        let clock = ManualClock::new();
        let mut chat = ChatSession::new();
        assert!(!chat.submit("   ", clock.now()));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_thinking());
    }

    #[test]
    fn clear_resets_to_greeting_and_cancels_pending_reply() {
        let clock = ManualClock::new();
        let mut chat = ChatSession::new();
        chat.submit("optimize", clock.now());
        chat.clear();

        clock.advance(RESPONSE_DELAY);
        chat.poll(clock.now());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, GREETING);
    }
}
