//! cli::resolve
//!
//! Three-tier value resolution and list splitting.
//!
//! # Design
//!
//! Every required parameter resolves the same way: explicit flag value,
//! else configuration default, else an interactive prompt. The prompt reads
//! exactly one line and uses it verbatim; an empty answer is accepted and
//! passed through to the engine, which owns validation.

use std::io::{self, Write};

use crate::ui::output;
use crate::ui::prompts::LineSource;

/// True when the value is absent or the empty string.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Split a comma-separated value into its unmodified substrings.
///
/// `None` stays `None`; callers decide what an absent list means. No
/// trimming, no filtering: `"a,,b"` yields three elements.
pub fn split(value: Option<&str>) -> Option<Vec<String>> {
    value.map(|v| v.split(',').map(str::to_string).collect())
}

/// Resolve one required parameter: explicit, else default, else prompt.
///
/// The prompt names the parameter and blocks on the injected line source.
pub fn resolve_value(
    explicit: Option<&str>,
    default: Option<&str>,
    name: &str,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> io::Result<String> {
    let chosen = if is_blank(explicit) { default } else { explicit };
    match chosen {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => {
            output::prompt(out, format_args!("Please provide a {}: ", name));
            input.read_line()
        }
    }
}

/// Resolve the server URL: explicit flag, else configured default.
///
/// Unlike the other parameters the server is never prompted for; when both
/// sources are empty the empty string goes to the engine, which rejects it.
pub fn resolve_server(explicit: Option<&str>, default: Option<&str>) -> String {
    if is_blank(explicit) {
        default.unwrap_or_default().to_string()
    } else {
        explicit.unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompts::ScriptedLines;

    #[test]
    fn blankness_of_none_empty_and_value() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(!is_blank(Some("x")));
    }

    #[test]
    fn split_none_is_none() {
        assert_eq!(split(None), None);
    }

    #[test]
    fn split_without_comma_is_single_element() {
        assert_eq!(split(Some("a;b")), Some(vec!["a;b".to_string()]));
    }

    #[test]
    fn split_on_commas_keeps_order_and_empties() {
        assert_eq!(
            split(Some("a,b")),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            split(Some("a,,b ")),
            Some(vec!["a".to_string(), String::new(), "b ".to_string()])
        );
    }

    #[test]
    fn explicit_value_wins_over_default() {
        let mut input = ScriptedLines::default();
        let mut out = Vec::new();

        let value =
            resolve_value(Some("explicit"), Some("default"), "MSISDN", &mut input, &mut out)
                .unwrap();

        assert_eq!(value, "explicit");
        assert!(out.is_empty());
    }

    #[test]
    fn default_used_when_explicit_is_empty() {
        let mut input = ScriptedLines::default();
        let mut out = Vec::new();

        let value =
            resolve_value(Some(""), Some("default"), "MSISDN", &mut input, &mut out).unwrap();

        assert_eq!(value, "default");
    }

    #[test]
    fn prompt_used_when_both_are_blank() {
        let mut input = ScriptedLines::new(["typed"]);
        let mut out = Vec::new();

        let value = resolve_value(None, Some(""), "password", &mut input, &mut out).unwrap();

        assert_eq!(value, "typed");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "Please provide a password: ");
    }

    #[test]
    fn empty_prompt_answer_is_accepted_verbatim() {
        let mut input = ScriptedLines::new([""]);
        let mut out = Vec::new();

        let value = resolve_value(None, None, "email", &mut input, &mut out).unwrap();

        assert_eq!(value, "");
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn server_falls_back_to_default_without_prompting() {
        assert_eq!(resolve_server(Some("srv"), Some("default")), "srv");
        assert_eq!(resolve_server(Some(""), Some("default")), "default");
        assert_eq!(resolve_server(None, None), "");
    }
}
