//! Guided learning mode: a fixed deck of tutorial steps with clamped
//! navigation and a per-step hint toggle.

#[derive(Debug, Clone, Copy)]
pub struct LessonStep {
    pub title: &'static str,
    pub content: &'static str,
    pub code: &'static str,
    pub task: &'static str,
    pub hint: &'static str,
}

pub const LESSON_STEPS: &[LessonStep] = &[
    LessonStep {
        title: "Welcome to Learning Mode",
        content: "This guided mode will help you learn to code step by step. We'll walk through creating a simple function together.",
        code: "// Follow along with the instructions",
        task: "Click \"Next\" to begin the tutorial.",
        hint: "Learning mode provides guided instructions for beginners.",
    },
    LessonStep {
        title: "Step 1: Declaring a Function",
        content: "Let's start by creating a basic function to calculate the factorial of a number.",
        code: "function factorial(n) {\n  // We'll implement this next\n}",
        task: "Type the function declaration as shown above.",
        hint: "A function is declared using the \"function\" keyword followed by the name and parameters in parentheses.",
    },
    LessonStep {
        title: "Step 2: Adding Base Case",
        content: "Every recursive function needs a base case to prevent infinite recursion.",
        code: "function factorial(n) {\n  if (n <= 1) {\n    return 1;\n  }\n  // We'll add more code here\n}",
        task: "Add the base case condition to handle when n is 0 or 1.",
        hint: "The factorial of 0 and 1 is 1, so we return 1 when n <= 1.",
    },
    LessonStep {
        title: "Step 3: Implementing Recursion",
        content: "Now let's implement the recursive case which calls the function itself.",
        code: "function factorial(n) {\n  if (n <= 1) {\n    return 1;\n  }\n  return n * factorial(n - 1);\n}",
        task: "Add the recursive call that multiplies n by factorial(n-1).",
        hint: "In a factorial, we multiply the current number by the factorial of the number before it.",
    },
    LessonStep {
        title: "Step 4: Testing the Function",
        content: "Let's test our function with a few examples to make sure it works correctly.",
        code: "function factorial(n) {\n  if (n <= 1) {\n    return 1;\n  }\n  return n * factorial(n - 1);\n}\n\nconsole.log(factorial(5));  // Should output: 120",
        task: "Add a console.log statement to test the factorial function with input 5.",
        hint: "The factorial of 5 is 5 * 4 * 3 * 2 * 1 = 120.",
    },
    LessonStep {
        title: "Congratulations!",
        content: "You've successfully implemented a factorial function using recursion! This is a common pattern in programming.",
        code: "function factorial(n) {\n  if (n <= 1) {\n    return 1;\n  }\n  return n * factorial(n - 1);\n}\n\nconsole.log(factorial(5));  // Outputs: 120\nconsole.log(factorial(0));  // Outputs: 1\nconsole.log(factorial(10)); // Outputs: 3628800",
        task: "Try more examples or modify the code to handle negative inputs.",
        hint: "For a complete implementation, you might want to add error handling for negative numbers since factorial is only defined for non-negative integers.",
    },
];

#[derive(Debug)]
pub struct LessonDeck {
    index: usize,
    hint_shown: bool,
}

impl LessonDeck {
    pub fn new() -> Self {
        Self {
            index: 0,
            hint_shown: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        LESSON_STEPS.len()
    }

    pub fn is_empty(&self) -> bool {
        LESSON_STEPS.is_empty()
    }

    pub fn current(&self) -> &'static LessonStep {
        &LESSON_STEPS[self.index]
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 == LESSON_STEPS.len()
    }

    /// Navigation clamps at the deck edges and hides any open hint.
    pub fn next(&mut self) {
        if !self.at_end() {
            self.index += 1;
            self.hint_shown = false;
        }
    }

    pub fn prev(&mut self) {
        if !self.at_start() {
            self.index -= 1;
            self.hint_shown = false;
        }
    }

    pub fn toggle_hint(&mut self) {
        self.hint_shown = !self.hint_shown;
    }
}

impl Default for LessonDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_clamps_at_both_edges() {
        let mut deck = LessonDeck::new();
        deck.prev();
        assert_eq!(deck.index(), 0);
        for _ in 0..20 {
            deck.next();
        }
        assert_eq!(deck.index(), LESSON_STEPS.len() - 1);
        assert!(deck.at_end());
        assert_eq!(deck.current().title, "Congratulations!");
    }

    #[test]
    fn navigation_resets_hint() {
        let mut deck = LessonDeck::new();
        deck.toggle_hint();
        assert!(deck.hint_shown());
        deck.next();
        assert!(!deck.hint_shown());
        deck.toggle_hint();
        deck.prev();
        assert!(!deck.hint_shown());
    }

    #[test]
    fn every_step_carries_full_guidance() {
        assert_eq!(LESSON_STEPS.len(), 6);
        for step in LESSON_STEPS {
            assert!(!step.title.is_empty());
            assert!(!step.content.is_empty());
            assert!(!step.code.is_empty());
            assert!(!step.task.is_empty());
            assert!(!step.hint.is_empty());
        }
    }
}
