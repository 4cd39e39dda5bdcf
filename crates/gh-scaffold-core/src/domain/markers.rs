//! Managed blocks: engine-owned regions inside otherwise user-owned files.
//!
//! A block is delimited by two marker lines carrying an opaque id:
//!
//! ```text
//! <!-- gh-scaffold:begin security -->
//! ...generated content...
//! <!-- gh-scaffold:end security -->
//! ```
//!
//! The marker format is persisted in users' repositories and must stay
//! byte-compatible across versions.

use std::ops::Range;

use regex::Regex;

const BEGIN: &str = "gh-scaffold:begin";
const END: &str = "gh-scaffold:end";

/// Opening marker line for `id` (without newline).
pub fn begin_marker(id: &str) -> String {
    format!("<!-- {BEGIN} {id} -->")
}

/// Closing marker line for `id` (without newline).
pub fn end_marker(id: &str) -> String {
    format!("<!-- {END} {id} -->")
}

/// Wrap `content` in a block. Trailing whitespace is normalised so wrapping
/// the same content twice is byte-identical.
pub fn wrap(id: &str, content: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        begin_marker(id),
        content.trim_end(),
        end_marker(id)
    )
}

fn end_pattern(id: &str) -> Regex {
    let pattern = format!(r"{}(?:\r?\n)?", regex::escape(&end_marker(id)));
    // The marker is an escaped literal, so the pattern is always valid.
    Regex::new(&pattern).expect("escaped marker pattern is a valid regex")
}

/// Byte range of the first block for `id`, including the end marker's line
/// break. A block closes at an end marker and opens at the nearest begin
/// marker before it, so stray begin or end lines stay user text.
fn find_block(text: &str, id: &str) -> Option<Range<usize>> {
    let begin = begin_marker(id);
    let mut from = 0;
    for end in end_pattern(id).find_iter(text) {
        if let Some(offset) = text[from..end.start()].rfind(&begin) {
            return Some(from + offset..end.end());
        }
        from = end.end();
    }
    None
}

/// Whether `text` already carries a block for `id`.
pub fn has_block(text: &str, id: &str) -> bool {
    find_block(text, id).is_some()
}

/// Replace the first block for `id`, or append one.
///
/// Only the first `begin..end` span is replaced; duplicated blocks left by
/// hand edits are not repaired. Everything outside the span is preserved
/// verbatim.
pub fn upsert(existing: &str, id: &str, new_content: &str) -> String {
    let block = wrap(id, new_content);

    if let Some(span) = find_block(existing, id) {
        let mut out = String::with_capacity(existing.len() + block.len());
        out.push_str(&existing[..span.start]);
        out.push_str(&block);
        out.push_str(&existing[span.end..]);
        return out;
    }

    let head = existing.trim_end();
    if head.is_empty() {
        block
    } else {
        format!("{head}\n\n{block}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_normalises_trailing_whitespace() {
        assert_eq!(
            wrap("x", "hello\n\n\n"),
            "<!-- gh-scaffold:begin x -->\nhello\n<!-- gh-scaffold:end x -->\n"
        );
        assert_eq!(wrap("x", "hello"), wrap("x", "hello  \n"));
    }

    #[test]
    fn upsert_appends_when_missing() {
        let out = upsert("A\n", "k", "B");
        assert_eq!(
            out,
            "A\n\n<!-- gh-scaffold:begin k -->\nB\n<!-- gh-scaffold:end k -->\n"
        );
    }

    #[test]
    fn upsert_into_empty_text_is_just_the_block() {
        assert_eq!(upsert("", "k", "B"), wrap("k", "B"));
    }

    #[test]
    fn upsert_isolates_user_text() {
        let before = "Intro\n<!-- gh-scaffold:begin k -->\nOLD\n<!-- gh-scaffold:end k -->\nOutro\n";
        let out = upsert(before, "k", "NEW");

        assert!(out.starts_with("Intro\n"));
        assert!(out.ends_with("Outro\n"));
        assert!(!out.contains("OLD"));
        assert!(out.contains("<!-- gh-scaffold:begin k -->\nNEW\n<!-- gh-scaffold:end k -->\n"));
    }

    #[test]
    fn upsert_is_idempotent() {
        let once = upsert("# Security\n\nUser intro\n", "security", "Policy");
        let twice = upsert(&once, "security", "Policy");
        assert_eq!(once, twice);
    }

    #[test]
    fn upsert_handles_empty_block() {
        let before = "top\n<!-- gh-scaffold:begin k --><!-- gh-scaffold:end k -->\nbottom\n";
        let out = upsert(before, "k", "filled");
        assert_eq!(
            out,
            "top\n<!-- gh-scaffold:begin k -->\nfilled\n<!-- gh-scaffold:end k -->\nbottom\n"
        );
    }

    #[test]
    fn only_first_duplicate_block_is_replaced() {
        let block = wrap("k", "OLD");
        let before = format!("{block}middle\n{block}");
        let out = upsert(&before, "k", "NEW");

        assert_eq!(out.matches("NEW").count(), 1);
        assert_eq!(out.matches("OLD").count(), 1);
        assert!(out.starts_with(&wrap("k", "NEW")));
    }

    #[test]
    fn other_ids_are_untouched() {
        let before = format!("{}{}", wrap("a", "one"), wrap("b", "two"));
        let out = upsert(&before, "b", "three");
        assert!(out.contains("one"));
        assert!(out.contains("three"));
        assert!(!out.contains("two"));
    }

    #[test]
    fn unterminated_begin_line_is_user_text() {
        let before = "<!-- gh-scaffold:begin k -->\nUSER PROSE\n";
        let once = upsert(before, "k", "NEW");
        assert_eq!(
            once,
            "<!-- gh-scaffold:begin k -->\nUSER PROSE\n\n\
             <!-- gh-scaffold:begin k -->\nNEW\n<!-- gh-scaffold:end k -->\n"
        );

        let twice = upsert(&once, "k", "NEW");
        assert_eq!(twice, once);
        assert!(twice.contains("USER PROSE"));
    }

    #[test]
    fn stray_end_line_before_a_block_is_user_text() {
        let before = format!("<!-- gh-scaffold:end k -->\nnotes\n{}", wrap("k", "OLD"));
        let out = upsert(&before, "k", "NEW");
        assert_eq!(out, format!("<!-- gh-scaffold:end k -->\nnotes\n{}", wrap("k", "NEW")));
    }

    #[test]
    fn crlf_line_break_after_end_marker_is_consumed() {
        let before = "Intro\r\n<!-- gh-scaffold:begin k -->\r\nOLD\r\n<!-- gh-scaffold:end k -->\r\nOutro\r\n";
        let out = upsert(before, "k", "NEW");
        assert_eq!(
            out,
            "Intro\r\n<!-- gh-scaffold:begin k -->\nNEW\n<!-- gh-scaffold:end k -->\nOutro\r\n"
        );
        assert_eq!(upsert(&out, "k", "NEW"), out);
    }

    #[test]
    fn ids_with_regex_metacharacters_are_literal() {
        let id = "a.b+(c)";
        let text = upsert("x\n", id, "first");
        assert!(has_block(&text, id));
        assert!(!has_block(&text, "aXb+(c)"));

        let updated = upsert(&text, id, "second");
        assert!(updated.contains("second"));
        assert!(!updated.contains("first"));
    }
}
