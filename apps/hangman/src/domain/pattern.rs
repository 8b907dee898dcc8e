//! Per-position view of the secret word.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLACEHOLDER;

/// One cell per character of the secret word; `None` is still hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedPattern {
    cells: Vec<Option<char>>,
}

impl RevealedPattern {
    /// All-blank pattern sized to `word` (in characters, not bytes).
    pub fn hidden(word: &str) -> Self {
        Self {
            cells: vec![None; word.chars().count()],
        }
    }

    /// Reveal every position of `word` holding `letter`.
    ///
    /// Returns how many cells were newly revealed.
    pub fn reveal_letter(&mut self, word: &str, letter: char) -> usize {
        let mut revealed = 0;
        for (cell, c) in self.cells.iter_mut().zip(word.chars()) {
            if c == letter && cell.is_none() {
                *cell = Some(c);
                revealed += 1;
            }
        }
        revealed
    }

    /// Reveal the whole word.
    pub fn reveal_all(&mut self, word: &str) {
        for (cell, c) in self.cells.iter_mut().zip(word.chars()) {
            *cell = Some(c);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Space-separated display form, e.g. `"c _ _ c _ _ _ _"`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell.unwrap_or(PLACEHOLDER));
        }
        out
    }
}
