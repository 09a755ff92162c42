//! The demo editor buffer: a fibonacci listing, AI suggestions, and the
//! complexity summary that updates when a suggestion is applied.

use std::time::{Duration, Instant};

use crate::reveal::TimedRevealQueue;

/// Delay before the suggestion list settles after a buffer change.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(1000);

pub const BUFFER_NAME: &str = "main.js";

const INITIAL_BUFFER: &str = "\
// Welcome to NeonCode
// A next-generation AI coding environment

function fibonacci(n) {
  // Base case
  if (n <= 1) return n;

  // Recursive case
  return fibonacci(n - 1) + fibonacci(n - 2);
}

// Calculate the first 10 Fibonacci numbers
const results = [];
for (let i = 0; i < 10; i++) {
  results.push(fibonacci(i));
}

console.log(\"Fibonacci sequence:\", results);
";

const MEMOIZED_BUFFER: &str = "\
// Welcome to NeonCode
// A next-generation AI coding environment

// Optimized fibonacci with memoization
function fibonacci(n, memo = {}) {
  // Check if we've already calculated this value
  if (n in memo) return memo[n];

  // Base case
  if (n <= 1) return n;

  // Store the result in our cache
  memo[n] = fibonacci(n - 1, memo) + fibonacci(n - 2, memo);
  return memo[n];
}

// Calculate the first 10 Fibonacci numbers
const results = [];
for (let i = 0; i < 10; i++) {
  results.push(fibonacci(i));
}

console.log(\"Fibonacci sequence:\", results);
";

const GUARDED_BUFFER: &str = "\
// Welcome to NeonCode
// A next-generation AI coding environment

function fibonacci(n, memo = {}) {
  // Input validation for negative numbers
  if (n < 0) {
    throw new Error(\"Input must be a non-negative integer\");
  }

  // Check if we've already calculated this value
  if (n in memo) return memo[n];

  // Base case
  if (n <= 1) return n;

  // Store the result in our cache
  memo[n] = fibonacci(n - 1, memo) + fibonacci(n - 2, memo);
  return memo[n];
}

// Calculate the first 10 Fibonacci numbers
const results = [];
try {
  for (let i = 0; i < 10; i++) {
    results.push(fibonacci(i));
  }
  console.log(\"Fibonacci sequence:\", results);
} catch (error) {
  console.error(\"Error:\", error.message);
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Optimization,
    Bug,
    Enhancement,
    Info,
}

#[derive(Debug, Clone, Copy)]
pub struct Suggestion {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: SuggestionKind,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        id: "s1",
        text: "Optimize fibonacci with memoization to improve performance",
        kind: SuggestionKind::Optimization,
    },
    Suggestion {
        id: "s2",
        text: "Add error handling for negative inputs in fibonacci function",
        kind: SuggestionKind::Bug,
    },
    Suggestion {
        id: "s3",
        text: "Consider using iterative approach instead of recursive for better efficiency",
        kind: SuggestionKind::Enhancement,
    },
    Suggestion {
        id: "s4",
        text: "Add JSDoc comments to document function parameters and return values",
        kind: SuggestionKind::Info,
    },
    Suggestion {
        id: "s5",
        text: "Extract the sequence generation to a separate helper function",
        kind: SuggestionKind::Enhancement,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Potential {
    High,
    Medium,
    Low,
}

impl Potential {
    pub fn label(self) -> &'static str {
        match self {
            Potential::High => "High",
            Potential::Medium => "Medium",
            Potential::Low => "Low",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodeAnalysis {
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub optimization_potential: Potential,
}

impl CodeAnalysis {
    fn exponential() -> Self {
        Self {
            time_complexity: "O(2^n) - Exponential",
            space_complexity: "O(n) - Linear stack space",
            optimization_potential: Potential::High,
        }
    }

    fn memoized() -> Self {
        Self {
            time_complexity: "O(n) - Linear",
            space_complexity: "O(n) - Linear memo cache",
            optimization_potential: Potential::Low,
        }
    }
}

/// Feedback surfaced to the user after clicking a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(&'static str),
    Locked,
}

impl ApplyOutcome {
    pub fn notice(self) -> &'static str {
        match self {
            ApplyOutcome::Applied(notice) => notice,
            ApplyOutcome::Locked => "This suggestion can be applied with a paid subscription.",
        }
    }
}

#[derive(Debug)]
pub struct DemoEditor {
    buffer: &'static str,
    analysis: CodeAnalysis,
    reanalysis: TimedRevealQueue<()>,
}

impl DemoEditor {
    pub fn new() -> Self {
        Self {
            buffer: INITIAL_BUFFER,
            analysis: CodeAnalysis::exponential(),
            reanalysis: TimedRevealQueue::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        self.buffer
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.lines()
    }

    pub fn analysis(&self) -> &CodeAnalysis {
        &self.analysis
    }

    pub fn is_analyzing(&self) -> bool {
        self.reanalysis.is_pending()
    }

    /// Apply a suggestion to the buffer. Only the memoization and
    /// error-handling suggestions actually rewrite code.
    pub fn apply(&mut self, suggestion: &Suggestion, now: Instant) -> ApplyOutcome {
        let outcome = match suggestion.id {
            "s1" => {
                self.buffer = MEMOIZED_BUFFER;
                self.analysis = CodeAnalysis::memoized();
                ApplyOutcome::Applied("Memoization has been added to improve performance.")
            }
            "s2" => {
                self.buffer = GUARDED_BUFFER;
                ApplyOutcome::Applied(
                    "Your code now validates inputs and handles errors gracefully.",
                )
            }
            _ => ApplyOutcome::Locked,
        };
        if matches!(outcome, ApplyOutcome::Applied(_)) {
            self.reanalysis.cancel();
            self.reanalysis.schedule_one(now, ANALYSIS_DELAY, ());
        }
        outcome
    }

    pub fn poll(&mut self, now: Instant) {
        self.reanalysis.poll(now);
    }
}

impl Default for DemoEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn memoization_rewrites_buffer_and_analysis() {
        let clock = ManualClock::new();
        let mut editor = DemoEditor::new();
        assert_eq!(editor.analysis().optimization_potential, Potential::High);

        let outcome = editor.apply(&SUGGESTIONS[0], clock.now());
        assert_eq!(
            outcome.notice(),
            "Memoization has been added to improve performance."
        );
        assert!(editor.buffer().contains("memo[n] = fibonacci(n - 1, memo)"));
        assert_eq!(editor.analysis().time_complexity, "O(n) - Linear");
        assert_eq!(editor.analysis().optimization_potential, Potential::Low);

        assert!(editor.is_analyzing());
        clock.advance(ANALYSIS_DELAY);
        editor.poll(clock.now());
        assert!(!editor.is_analyzing());
    }

    #[test]
    fn error_handling_guards_negative_inputs() {
        let clock = ManualClock::new();
        let mut editor = DemoEditor::new();
        editor.apply(&SUGGESTIONS[1], clock.now());
        assert!(editor.buffer().contains("if (n < 0)"));
        assert!(editor.buffer().contains("catch (error)"));
        // Complexity summary is untouched by the bug fix alone.
        assert_eq!(editor.analysis().time_complexity, "O(2^n) - Exponential");
    }

    #[test]
    fn remaining_suggestions_are_locked() {
        let clock = ManualClock::new();
        let mut editor = DemoEditor::new();
        for suggestion in &SUGGESTIONS[2..] {
            let outcome = editor.apply(suggestion, clock.now());
            assert_eq!(outcome, ApplyOutcome::Locked);
            assert!(!editor.is_analyzing());
        }
        assert_eq!(editor.buffer(), INITIAL_BUFFER);
    }
}
