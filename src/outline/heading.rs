//! Heading detection heuristics for plain-text lines.
//!
//! Plain-text sources carry no markup, so headings are recognized by shape.
//! A line qualifies as a heading when any of these match, checked in order:
//!
//! 1. Leading digits followed by `.` or whitespace ("3. Scope", "2 Overview")
//! 2. Short line (under 50 chars) ending with an ASCII or full-width colon
//! 3. Chapter marker using Chinese numerals or digits ("第三章", "第12章")

use crate::model::SENTINEL_LEVEL;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.\s]").expect("static regex"));

static CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^第[一二三四五六七八九十\d]+章").expect("static regex"));

/// Maximum character count for the colon-terminated heading rule.
const COLON_RULE_MAX_CHARS: usize = 50;

/// Check whether a trimmed line looks like a heading.
#[must_use]
pub fn is_heading_line(line: &str) -> bool {
    if NUMBERED.is_match(line) {
        return true;
    }
    if line.chars().count() < COLON_RULE_MAX_CHARS
        && (line.ends_with(':') || line.ends_with('：'))
    {
        return true;
    }
    CHAPTER.is_match(line)
}

/// Heading level for a detected heading line.
///
/// The level is the count of leading digit characters, capped at 6. Lines
/// matched by the colon or chapter rules have no leading digits and default
/// to level 1.
#[must_use]
pub fn heading_level(line: &str) -> u8 {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        1
    } else {
        digits.min(6) as u8
    }
}

/// Level for a line: heading level if detected, sentinel otherwise.
#[must_use]
pub fn line_level(line: &str) -> u8 {
    if is_heading_line(line) {
        heading_level(line)
    } else {
        SENTINEL_LEVEL
    }
}
