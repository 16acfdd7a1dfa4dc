//! Markdown code-fence stripping for model output
//!
//! Models asked for bare JSON often wrap it in a fenced block anyway:
//!
//! ````text
//! ```json
//! {"nodes": [], "edges": []}
//! ```
//! ````
//!
//! [`strip_code_fence`] removes a leading opener line and a trailing closer of
//! three or more backticks when present, and leaves the payload untouched otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest backtick run that forms a fence
const MIN_FENCE: usize = 3;

/// Opening fence of three or more backticks, optional info label, and the
/// rest of the opener line when blank
static FENCE_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^`{3,}[ \t]*[A-Za-z0-9_+\-]*[ \t]*(?:\r?\n)?").expect("fence opener pattern is valid")
});

/// Remove surrounding markdown fence markers from `text`
///
/// Handles absent fences, opener-only and closer-only fragments, CRLF line
/// endings, trailing blank lines, and inline payloads such as
/// `` ```json{"a":1}``` ``. The result is always trimmed.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(opener) = FENCE_OPENER.find(body) {
        body = body[opener.end()..].trim_start();
    }

    let closer = body.len() - body.trim_end_matches('`').len();
    if closer >= MIN_FENCE {
        body = body[..body.len() - closer].trim_end();
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"nodes":[{"id":"A","label":"Intro"}],"edges":[]}"#;

    #[test]
    fn strip_table() {
        let cases: &[(&str, String, &str)] = &[
            ("no fence", PAYLOAD.to_string(), PAYLOAD),
            ("no fence, padded", format!("  \n{PAYLOAD}\n\n"), PAYLOAD),
            ("json fence", format!("```json\n{PAYLOAD}\n```"), PAYLOAD),
            ("upper-case label", format!("```JSON\n{PAYLOAD}\n```"), PAYLOAD),
            ("unlabeled fence", format!("```\n{PAYLOAD}\n```"), PAYLOAD),
            ("opener only", format!("```json\n{PAYLOAD}"), PAYLOAD),
            ("closer only", format!("{PAYLOAD}\n```"), PAYLOAD),
            ("crlf", format!("```json\r\n{PAYLOAD}\r\n```\r\n"), PAYLOAD),
            ("trailing blank lines", format!("```json\n{PAYLOAD}\n```\n\n  \n"), PAYLOAD),
            ("label padding", format!("```json  \n{PAYLOAD}\n```"), PAYLOAD),
            ("space before label", format!("``` json\n{PAYLOAD}\n```"), PAYLOAD),
            ("inline payload", format!("```json{PAYLOAD}```"), PAYLOAD),
            ("blank lines inside", format!("```json\n\n{PAYLOAD}\n\n```"), PAYLOAD),
            ("four-backtick fence", format!("````json\n{PAYLOAD}\n````"), PAYLOAD),
            ("long unlabeled fence", format!("`````\n{PAYLOAD}\n`````"), PAYLOAD),
            ("bare fence", "```".to_string(), ""),
            ("empty", String::new(), ""),
        ];

        for (name, input, expected) in cases {
            assert_eq!(strip_code_fence(input), *expected, "case: {name}");
        }
    }

    #[test]
    fn strip_keeps_inner_backticks() {
        let text = "```json\n{\"label\":\"use ``` sparingly\"}\n```";
        assert_eq!(strip_code_fence(text), "{\"label\":\"use ``` sparingly\"}");
    }

    #[test]
    fn strip_is_idempotent_on_payload() {
        let once = strip_code_fence("```json\n{\"a\": 1}\n```");
        assert_eq!(strip_code_fence(once), once);
    }

    #[test]
    fn long_fence_leaves_no_stray_backticks() {
        assert_eq!(strip_code_fence("````json\n{\"a\":1}\n````"), "{\"a\":1}");
        assert_eq!(strip_code_fence("{\"a\":1}\n``````"), "{\"a\":1}");
    }
}
