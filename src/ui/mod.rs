//! ui
//!
//! User interaction utilities: line input and the output sink.

pub mod output;
pub mod prompts;

pub use prompts::{LineSource, ScriptedLines, StdinLines};
