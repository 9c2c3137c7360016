// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small string helpers shared by the raw content parsers.

const FULLWIDTH_OPEN: char = '（';
const FULLWIDTH_CLOSE: char = '）';
const CHINESE_ANNOTATION: &str = "（中文：";

/// Checks if the character is one of the common CJK unified ideographs.
#[must_use]
pub fn is_chinese_char(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Checks if the text contains at least one Chinese character.
#[must_use]
pub fn is_chinese(text: &str) -> bool {
    text.chars().any(is_chinese_char)
}

#[must_use]
pub fn has_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Checks if the text contains Latin letters and no Chinese characters.
#[must_use]
pub fn is_english(text: &str) -> bool {
    !is_chinese(text) && has_latin(text)
}

/// Strips a full-width or ASCII colon from the beginning of the text.
fn strip_colon(text: &str) -> Option<&str> {
    text.strip_prefix(':').or_else(|| text.strip_prefix('：'))
}

/// If the line starts with a heading of exactly the given level followed by whitespace,
/// returns the heading marker (with the whitespace) and the heading text.
#[must_use]
pub fn split_heading(line: &str, level: usize) -> Option<(&str, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes != level {
        return None;
    }
    let rest = &line[level..];
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    let prefix_len = line.len() - text.len();
    Some((&line[..prefix_len], text))
}

/// Returns the trimmed text of a heading of exactly the given level.
#[must_use]
pub fn heading(line: &str, level: usize) -> Option<&str> {
    split_heading(line, level).map(|(_, text)| text.trim())
}

/// Strips a leading `**Marker**:` (or `**Marker**：`) and the whitespace after it.
#[must_use]
pub fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix("**")?.strip_prefix(marker)?.strip_prefix("**")?;
    strip_colon(rest).map(str::trim_start)
}

/// Finds `**Marker**:` anywhere in the line and returns the non-empty trimmed text after it.
#[must_use]
pub fn find_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let needle = format!("**{marker}**");
    line.match_indices(needle.as_str()).find_map(|(pos, _)| {
        let value = strip_colon(&line[pos + needle.len()..])?.trim();
        if value.is_empty() { None } else { Some(value) }
    })
}

/// Parses `Key** : value` where the opening `**` was already consumed.
fn key_value_at(text: &str) -> Option<(&str, &str)> {
    let end = text.find('*')?;
    if end == 0 {
        return None;
    }
    let key = &text[..end];
    let rest = text[end..].strip_prefix("**")?.trim_start();
    let rest = strip_colon(rest)?;
    if rest.is_empty() {
        return None;
    }
    Some((key, rest.trim()))
}

/// Finds the first `**Key**: value` pair in the line.
///
/// The key is returned as written, the value is trimmed.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    line.match_indices("**").find_map(|(pos, _)| key_value_at(&line[pos + 2..]))
}

/// Finds the first `- **Key**: value` list entry in the line.
#[must_use]
pub fn parse_list_key_value(line: &str) -> Option<(&str, &str)> {
    line.match_indices('-').find_map(|(pos, _)| {
        let rest = line[pos + 1..].trim_start().strip_prefix("**")?;
        key_value_at(rest)
    })
}

/// Returns the longest non-empty prefix made of characters accepted by the predicate.
#[must_use]
pub fn leading_run(text: &str, accept: impl Fn(char) -> bool) -> Option<&str> {
    let end = text.find(|c: char| !accept(c)).unwrap_or(text.len());
    if end == 0 { None } else { Some(&text[..end]) }
}

/// Removes all `（…）` spans.
///
/// With `allow_empty` set to `false` the empty `（）` pair is kept.
#[must_use]
pub fn remove_fullwidth_groups(text: &str, allow_empty: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(FULLWIDTH_OPEN) {
        let after = &rest[open + FULLWIDTH_OPEN.len_utf8()..];
        match after.find(FULLWIDTH_CLOSE) {
            Some(close) if allow_empty || close > 0 => {
                result.push_str(&rest[..open]);
                rest = &after[close + FULLWIDTH_CLOSE.len_utf8()..];
            }
            _ => {
                result.push_str(&rest[..open + FULLWIDTH_OPEN.len_utf8()]);
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Replaces every run of Chinese characters with the replacement.
#[must_use]
pub fn replace_chinese(text: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_chinese_char(c) {
            if !in_run {
                result.push_str(replacement);
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }
    result
}

/// Joins all whitespace-separated words with single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the payload of the first non-empty `（中文：…）` annotation.
#[must_use]
pub fn chinese_annotation(text: &str) -> Option<&str> {
    text.match_indices(CHINESE_ANNOTATION).find_map(|(pos, _)| {
        let after = &text[pos + CHINESE_ANNOTATION.len()..];
        let close = after.find(FULLWIDTH_CLOSE)?;
        if close == 0 { None } else { Some(&after[..close]) }
    })
}

#[must_use]
pub fn has_chinese_annotation(text: &str) -> bool {
    text.contains(CHINESE_ANNOTATION)
}

/// Extracts the content of the first non-empty parenthesised group.
///
/// Both full-width and ASCII parentheses are accepted and can be mixed.
#[must_use]
pub fn first_paren_group(text: &str) -> Option<&str> {
    let is_open = |c: char| c == FULLWIDTH_OPEN || c == '(';
    let is_close = |c: char| c == FULLWIDTH_CLOSE || c == ')';
    text.match_indices(is_open).find_map(|(pos, open)| {
        let after = &text[pos + open.len()..];
        let close = after.find(is_close)?;
        if close == 0 { None } else { Some(&after[..close]) }
    })
}

/// Replaces every run of three or more newlines with a single blank line.
#[must_use]
pub fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                result.push(c);
            }
        } else {
            newlines = 0;
            result.push(c);
        }
    }
    result
}

/// Drops empty lines directly following another empty line and joins the lines.
#[must_use]
pub fn join_dedup_empty(mut lines: Vec<String>) -> String {
    lines.dedup_by(|current, previous| current.is_empty() && previous.is_empty());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert!(is_chinese("RWAI 竞技场"));
        assert!(!is_chinese("RWAI Arena（）"));
        assert!(is_english("Hello"));
        assert!(!is_english("Hello 世界"));
        assert!(!is_english("123 - !"));
    }

    #[test]
    fn test_headings() {
        assert_eq!(split_heading("### Title ", 3), Some(("### ", "Title ")));
        assert_eq!(heading("##   Hero Section  ", 2), Some("Hero Section"));
        assert_eq!(heading("### Hero", 2), None);
        assert_eq!(heading("##Hero", 2), None);
        assert_eq!(heading("#### Q1: Why?", 4), Some("Q1: Why?"));
    }

    #[test]
    fn test_markers() {
        assert_eq!(strip_marker("**English**:  Hello", "English"), Some("Hello"));
        assert_eq!(strip_marker("**中文**：你好", "中文"), Some("你好"));
        assert_eq!(strip_marker("**English** Hello", "English"), None);
        assert_eq!(strip_marker(" **English**: Hello", "English"), None);

        assert_eq!(find_marker("- **English**: Hello ", "English"), Some("Hello"));
        assert_eq!(find_marker("**English**:   ", "English"), None);
        assert_eq!(find_marker("**English** and **English**: two", "English"), Some("two"));
    }

    #[test]
    fn test_key_values() {
        assert_eq!(parse_list_key_value("- **Title (EN)**: Hello "), Some(("Title (EN)", "Hello")));
        assert_eq!(parse_list_key_value("  -  **标题**：你好"), Some(("标题", "你好")));
        assert_eq!(parse_list_key_value("- **Title**"), None);
        assert_eq!(parse_list_key_value("**Title**: no dash"), None);

        assert_eq!(parse_key_value("**Mission** : Build"), Some(("Mission", "Build")));
        assert_eq!(parse_key_value("**a** text **b**: c"), Some(("b", "c")));
        assert_eq!(parse_key_value("**Partner List**:"), None);
    }

    #[test]
    fn test_leading_run() {
        let accept = |c: char| c.is_ascii_alphanumeric() || c.is_whitespace();
        assert_eq!(leading_run("Our Mission（我们的使命）", accept), Some("Our Mission"));
        assert_eq!(leading_run("我们的使命", accept), None);
    }

    #[test]
    fn test_fullwidth_groups() {
        assert_eq!(remove_fullwidth_groups("A（一）B（二）C", true), "ABC");
        assert_eq!(remove_fullwidth_groups("A（）B", true), "AB");
        assert_eq!(remove_fullwidth_groups("A（）B", false), "A（）B");
        assert_eq!(remove_fullwidth_groups("A（open", true), "A（open");

        assert_eq!(chinese_annotation("Arena（中文：竞技场）"), Some("竞技场"));
        assert_eq!(chinese_annotation("Arena（中文：）"), None);
        assert!(has_chinese_annotation("Arena（中文：）"));

        assert_eq!(first_paren_group("About Us（关于我们）"), Some("关于我们"));
        assert_eq!(first_paren_group("About Us (关于我们)"), Some("关于我们"));
        assert_eq!(first_paren_group("About () Us（关于）"), Some("关于"));
        assert_eq!(first_paren_group("About Us"), None);
    }

    #[test]
    fn test_chinese_replacement() {
        assert_eq!(replace_chinese("Arena 竞技场 v1", " "), "Arena   v1");
        assert_eq!(replace_chinese("Arena竞技场", ""), "Arena");
        assert_eq!(collapse_whitespace("  a \t b  "), "a b");
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(collapse_newlines("a\n\n\n\nb\nc\n\nd"), "a\n\nb\nc\n\nd");
        let lines = vec!["a", "", "", "b", "", "c"].into_iter().map(String::from).collect();
        assert_eq!(join_dedup_empty(lines), "a\n\nb\n\nc");
    }
}
