//! Saved prompt shortcuts for the assistant input line.

/// Ordered most-recent-first, deduplicated on insert. Session-scoped.
#[derive(Debug, Clone)]
pub struct SavedPrompts {
    entries: Vec<String>,
}

pub const DEFAULT_PROMPTS: &[&str] = &[
    "Optimize this function for better performance",
    "Explain this algorithm step by step",
    "Generate documentation for this code",
];

impl SavedPrompts {
    pub fn with_defaults() -> Self {
        Self {
            entries: DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Prepend the trimmed prompt. Duplicates (and blank input) leave
    /// the list untouched, including its order; returns whether the
    /// prompt was added.
    pub fn save(&mut self, prompt: &str) -> bool {
        let trimmed = prompt.trim();
        if trimmed.is_empty() || self.entries.iter().any(|p| p == trimmed) {
            return false;
        }
        self.entries.insert(0, trimmed.to_string());
        true
    }
}

impl Default for SavedPrompts {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_prompts_are_prepended() {
        let mut prompts = SavedPrompts::with_defaults();
        assert!(prompts.save("Refactor this module"));
        assert_eq!(prompts.get(0), Some("Refactor this module"));
        assert_eq!(prompts.len(), DEFAULT_PROMPTS.len() + 1);
    }

    #[test]
    fn duplicate_insert_is_a_no_op_on_length_and_order() {
        let mut prompts = SavedPrompts::with_defaults();
        let before: Vec<String> = prompts.entries().to_vec();
        assert!(!prompts.save(DEFAULT_PROMPTS[1]));
        assert_eq!(prompts.entries(), &before[..]);
    }

    #[test]
    fn input_is_trimmed_before_the_duplicate_check() {
        let mut prompts = SavedPrompts::with_defaults();
        assert!(!prompts.save(&format!("  {}  ", DEFAULT_PROMPTS[0])));
        assert!(!prompts.save("   "));
        assert_eq!(prompts.len(), DEFAULT_PROMPTS.len());
    }
}
