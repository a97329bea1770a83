//! Ordered assembly instruction builder
//!
//! Steps are appended in their fixed logical slot, optional ones with a
//! condition. Numbering happens once in [`AssemblySteps::render`], so a
//! skipped optional step never leaves a gap.

/// Accumulates assembly steps in order
#[derive(Debug, Clone, Default)]
pub struct AssemblySteps {
    entries: Vec<(bool, String)>,
}

impl AssemblySteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional step
    pub fn step(self, text: impl Into<String>) -> Self {
        self.step_if(true, text)
    }

    /// Step included only when `condition` holds
    pub fn step_if(mut self, condition: bool, text: impl Into<String>) -> Self {
        self.entries.push((condition, text.into()));
        self
    }

    /// One of two alternative texts for the same slot
    pub fn step_either(
        self,
        condition: bool,
        when_true: impl Into<String>,
        when_false: impl Into<String>,
    ) -> Self {
        if condition {
            self.step(when_true)
        } else {
            self.step(when_false)
        }
    }

    /// Number of steps that will be rendered
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|(keep, _)| *keep).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Final `"N. text"` lines, numbered from 1
    pub fn render(self) -> Vec<String> {
        self.entries
            .into_iter()
            .filter(|(keep, _)| *keep)
            .enumerate()
            .map(|(i, (_, text))| format!("{}. {}", i + 1, text))
            .collect()
    }
}
