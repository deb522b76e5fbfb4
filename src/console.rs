//! The input and display boundary of the engine.
//!
//! The engine never reads a terminal itself. Every decision point and every
//! line of table output goes through a [`Console`], so the same round logic
//! drives the interactive binary, automated play and tests.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Source of player decisions and sink for table output.
pub trait Console {
    /// Asks a yes/no question. Returns `true` for yes.
    fn ask_yes_no(&mut self, question: &str) -> bool;

    /// Asks for a number in `low..=high`.
    fn ask_number(&mut self, question: &str, low: u8, high: u8) -> u8;

    /// Asks for a line of free text.
    fn ask_line(&mut self, question: &str) -> String;

    /// Shows a line of table output.
    fn show(&mut self, _line: &str) {}
}

/// A console that answers from a prepared script.
///
/// Yes/no questions pop the next queued answer and fall back to
/// [`Scripted::fallback`] once the queue is empty. Every shown line and every
/// question asked is recorded.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    answers: VecDeque<bool>,
    numbers: VecDeque<u8>,
    lines: VecDeque<String>,
    /// Answer given once the yes/no queue runs dry.
    pub fallback: bool,
    /// Lines passed to [`Console::show`].
    pub shown: Vec<String>,
    /// Questions asked, in order.
    pub asked: Vec<String>,
}

impl Scripted {
    /// Creates a console that answers the given yes/no sequence.
    #[must_use]
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Creates a console that answers "no" to everything.
    #[must_use]
    pub fn declining() -> Self {
        Self::default()
    }

    /// Queues answers for [`Console::ask_number`].
    #[must_use]
    pub fn with_numbers(mut self, numbers: &[u8]) -> Self {
        self.numbers.extend(numbers.iter().copied());
        self
    }

    /// Queues answers for [`Console::ask_line`].
    #[must_use]
    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|line| (*line).to_string()));
        self
    }

    /// Sets the answer given once the yes/no queue is empty.
    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the number of yes/no answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for Scripted {
    fn ask_yes_no(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(self.fallback)
    }

    fn ask_number(&mut self, question: &str, low: u8, high: u8) -> u8 {
        self.asked.push(question.to_string());
        self.numbers.pop_front().unwrap_or(low).clamp(low, high)
    }

    fn ask_line(&mut self, question: &str) -> String {
        self.asked.push(question.to_string());
        self.lines.pop_front().unwrap_or_default()
    }

    fn show(&mut self, line: &str) {
        self.shown.push(line.to_string());
    }
}
