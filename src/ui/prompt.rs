// ABOUTME: Interactive confirmation used before destructive actions
// ABOUTME: Stdin-backed prompt for the CLI and a fixed answer for --yes and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Something that can answer a yes/no question
pub trait Confirm: Send {
    /// Ask `question`; `true` means the user agreed
    fn confirm(&mut self, question: &str) -> bool;
}

/// Asks on stdout and reads the answer from stdin
///
/// Only an explicit yes (`s`, `si`, `sí`, `y`, `yes`) confirms.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "{question} [s/N] ").and_then(|()| stdout.flush()) {
            warn!(error = %e, "Could not write confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut answer) {
            warn!(error = %e, "Could not read confirmation answer");
            return false;
        }
        is_affirmative(&answer)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Gives the same answer every time and remembers what was asked
#[derive(Debug, Clone, Default)]
pub struct FixedAnswer {
    answer: bool,
    asked: Vec<String>,
}

impl FixedAnswer {
    /// Always answer `answer`
    #[must_use]
    pub const fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }

    /// Questions asked so far
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Confirm for FixedAnswer {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_owned());
        self.answer
    }
}
