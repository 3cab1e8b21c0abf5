//! ui::output
//!
//! Output helpers over an injected sink.
//!
//! # Design
//!
//! All handler output flows through a `&mut dyn Write` so tests can capture
//! it in a buffer. Write failures on the sink are ignored, matching normal
//! console semantics: a broken stdout must not change control flow.

use std::fmt::Display;
use std::io::Write;

/// Print a line to the sink.
pub fn print(out: &mut dyn Write, message: impl Display) {
    let _ = writeln!(out, "{}", message);
}

/// Print a prompt without a trailing newline and flush.
pub fn prompt(out: &mut dyn Write, message: impl Display) {
    let _ = write!(out, "{}", message);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_appends_newline() {
        let mut buf = Vec::new();
        print(&mut buf, "hello");
        assert_eq!(String::from_utf8(buf).unwrap(), "hello\n");
    }

    #[test]
    fn prompt_does_not_append_newline() {
        let mut buf = Vec::new();
        prompt(&mut buf, "pincode: ");
        assert_eq!(String::from_utf8(buf).unwrap(), "pincode: ");
    }
}
