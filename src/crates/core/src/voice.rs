//! Voice command panel.
//!
//! Terminals have no speech recognition, so the transcript is typed in
//! push-to-talk style. Everything downstream of the transcript is
//! simulated: a short "processing" stage, an interpreted canned
//! response (or a not-recognized failure), and auto-dismissal after a
//! few seconds. The learning-mode command asks the host to flip the
//! shared learning flag.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::reveal::TimedRevealQueue;

pub const PROCESSING_DELAY: Duration = Duration::from_millis(1000);
pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Action keyword × target keyword matrix, walked in order with the
/// same first-match rule as the chat responder.
const COMMANDS: &[(&str, &[(&str, &str)])] = &[
    (
        "generate",
        &[
            ("react component", "Creating a new React component with state management and effects."),
            ("api endpoint", "Generating a RESTful API endpoint with validation."),
            ("login form", "Creating a secure login form with validation."),
            ("navigation menu", "Creating a responsive navigation menu component."),
            ("button", "Creating a customizable button component."),
        ],
    ),
    (
        "optimize",
        &[
            ("function", "Analyzing and optimizing function for better performance."),
            ("loop", "Refactoring loop for improved efficiency."),
            ("query", "Optimizing database query execution plan."),
            ("code", "Analyzing and optimizing your code for better performance."),
        ],
    ),
    (
        "debug",
        &[
            ("error", "Analyzing code for potential errors and bugs."),
            ("memory leak", "Scanning for memory leaks in application."),
            ("performance", "Identifying performance bottlenecks."),
            ("code", "Debugging your code for issues."),
        ],
    ),
    (
        "explain",
        &[
            ("code", "Providing detailed explanation of selected code."),
            ("algorithm", "Explaining how this algorithm works step by step."),
            ("pattern", "Describing this design pattern and its applications."),
            ("function", "Explaining how this function works in detail."),
        ],
    ),
];

pub const LEARNING_RESPONSE: &str =
    "Learning mode activated. I'll guide you through coding step by step.";
pub const CREATE_FALLBACK: &str = "Creating new code elements based on your request.";
pub const HELP_RESPONSE: &str =
    "Voice commands available: generate, optimize, debug, explain, help.";
pub const NOT_RECOGNIZED: &str =
    "Command not recognized. Try saying \"Generate a React component\" or \"Help\".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceOutcome {
    pub success: bool,
    pub response: &'static str,
    /// The learning-mode command flips the shared session flag.
    pub activate_learning: bool,
}

/// Interpret a transcript. Pure; callers filter empty input.
pub fn interpret(transcript: &str) -> VoiceOutcome {
    debug_assert!(!transcript.trim().is_empty());
    let lower = transcript.to_lowercase();

    if lower.contains("learning")
        && (lower.contains("mode") || lower.contains("start") || lower.contains("begin"))
    {
        return VoiceOutcome {
            success: true,
            response: LEARNING_RESPONSE,
            activate_learning: true,
        };
    }

    for (action, targets) in COMMANDS {
        if lower.contains(action) {
            for (target, response) in *targets {
                if lower.contains(target) {
                    return VoiceOutcome {
                        success: true,
                        response,
                        activate_learning: false,
                    };
                }
            }
        }
    }

    if lower.contains("create") || lower.contains("make") || lower.contains("add") {
        return VoiceOutcome {
            success: true,
            response: CREATE_FALLBACK,
            activate_learning: false,
        };
    }
    if lower.contains("help") || lower.contains("assistance") {
        return VoiceOutcome {
            success: true,
            response: HELP_RESPONSE,
            activate_learning: false,
        };
    }

    VoiceOutcome {
        success: false,
        response: NOT_RECOGNIZED,
        activate_learning: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePhase {
    Idle,
    Listening,
    Processing,
    Responded,
}

/// Effect surfaced to the host when a processed command needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEffect {
    ActivateLearning,
}

#[derive(Debug)]
pub struct VoicePanel {
    phase: VoicePhase,
    transcript: String,
    outcome: Option<VoiceOutcome>,
    pending: TimedRevealQueue<VoiceOutcome>,
    dismiss_at: Option<Instant>,
    feedback_enabled: bool,
}

impl VoicePanel {
    pub fn new() -> Self {
        Self {
            phase: VoicePhase::Idle,
            transcript: String::new(),
            outcome: None,
            pending: TimedRevealQueue::new(),
            dismiss_at: None,
            feedback_enabled: true,
        }
    }

    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn outcome(&self) -> Option<&VoiceOutcome> {
        self.outcome.as_ref()
    }

    pub fn feedback_enabled(&self) -> bool {
        self.feedback_enabled
    }

    /// Voice feedback is a toggle only; no audio backend exists.
    pub fn toggle_feedback(&mut self) {
        self.feedback_enabled = !self.feedback_enabled;
    }

    /// Mic toggle: entering listening clears previous state; leaving it
    /// cancels anything in flight.
    pub fn toggle_listening(&mut self) {
        match self.phase {
            VoicePhase::Idle => {
                self.transcript.clear();
                self.outcome = None;
                self.phase = VoicePhase::Listening;
            }
            _ => self.reset(),
        }
    }

    pub fn transcript_mut(&mut self) -> Option<&mut String> {
        (self.phase == VoicePhase::Listening).then_some(&mut self.transcript)
    }

    /// Finish the transcript and start the processing stage.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase != VoicePhase::Listening || self.transcript.trim().is_empty() {
            return false;
        }
        let outcome = interpret(&self.transcript);
        self.pending.schedule_one(now, PROCESSING_DELAY, outcome);
        self.phase = VoicePhase::Processing;
        debug!(transcript = %self.transcript, success = outcome.success, "voice command");
        true
    }

    /// Drive the processing delay and the auto-dismiss window.
    pub fn poll(&mut self, now: Instant) -> Option<VoiceEffect> {
        let mut effect = None;
        for outcome in self.pending.poll(now) {
            self.phase = VoicePhase::Responded;
            self.dismiss_at = Some(now + DISMISS_AFTER);
            if outcome.activate_learning {
                effect = Some(VoiceEffect::ActivateLearning);
            }
            self.outcome = Some(outcome);
        }
        if let Some(at) = self.dismiss_at {
            if now >= at {
                self.reset();
            }
        }
        effect
    }

    fn reset(&mut self) {
        self.pending.cancel();
        self.phase = VoicePhase::Idle;
        self.transcript.clear();
        self.outcome = None;
        self.dismiss_at = None;
    }
}

impl Default for VoicePanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn action_and_target_select_the_response() {
        assert_eq!(
            interpret("please generate a react component").response,
            "Creating a new React component with state management and effects."
        );
        assert_eq!(
            interpret("optimize this loop").response,
            "Refactoring loop for improved efficiency."
        );
        assert_eq!(
            interpret("debug a memory leak").response,
            "Scanning for memory leaks in application."
        );
        assert_eq!(
            interpret("explain the pattern").response,
            "Describing this design pattern and its applications."
        );
    }

    #[test]
    fn learning_mode_command_requests_the_flag() {
        let outcome = interpret("start learning mode");
        assert!(outcome.success);
        assert!(outcome.activate_learning);
        assert_eq!(outcome.response, LEARNING_RESPONSE);
    }

    #[test]
    fn action_without_target_falls_through_to_generic_fallbacks() {
        // "generate" matches no target, but "make"/"help" fallbacks do.
        assert!(!interpret("generate happiness").success);
        assert_eq!(interpret("make me a sandwich").response, CREATE_FALLBACK);
        assert_eq!(interpret("help").response, HELP_RESPONSE);
    }

    #[test]
    fn unknown_command_is_a_failure() {
        let outcome = interpret("sing a song");
        assert!(!outcome.success);
        assert_eq!(outcome.response, NOT_RECOGNIZED);
    }

    #[test]
    fn panel_runs_listen_process_respond_dismiss() {
        let clock = ManualClock::new();
        let mut panel = VoicePanel::new();
        panel.toggle_listening();
        panel.transcript_mut().unwrap().push_str("start learning mode");
        assert!(panel.submit(clock.now()));
        assert_eq!(panel.phase(), VoicePhase::Processing);

        clock.advance(PROCESSING_DELAY);
        let effect = panel.poll(clock.now());
        assert_eq!(effect, Some(VoiceEffect::ActivateLearning));
        assert_eq!(panel.phase(), VoicePhase::Responded);

        clock.advance(DISMISS_AFTER);
        panel.poll(clock.now());
        assert_eq!(panel.phase(), VoicePhase::Idle);
        assert!(panel.transcript().is_empty());
    }

    #[test]
    fn toggling_off_cancels_in_flight_processing() {
        let clock = ManualClock::new();
        let mut panel = VoicePanel::new();
        panel.toggle_listening();
        panel.transcript_mut().unwrap().push_str("help");
        panel.submit(clock.now());
        panel.toggle_listening();

        clock.advance(PROCESSING_DELAY);
        assert_eq!(panel.poll(clock.now()), None);
        assert_eq!(panel.phase(), VoicePhase::Idle);
    }
}
