//! ui::prompts
//!
//! Interactive line input.
//!
//! # Design
//!
//! Reading a line from the user is an injected capability rather than a
//! direct console read, so value resolution can be tested with a scripted
//! source. The production implementation blocks on standard input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A source of user-entered lines.
pub trait LineSource {
    /// Read the next line, without the trailing newline.
    ///
    /// End of input is an error: the CLI has nothing sensible to do when a
    /// required answer can never arrive.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Production line source reading from standard input.
#[derive(Debug, Default)]
pub struct StdinLines;

impl StdinLines {
    /// Create a stdin-backed line source.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Scripted line source for tests.
///
/// Returns the queued answers in order; reading past the end yields an
/// `UnexpectedEof` error, same as a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    answers: VecDeque<String>,
}

impl ScriptedLines {
    /// Create a scripted source from a list of answers.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}
