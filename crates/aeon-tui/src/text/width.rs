//! Unicode-aware width measurement and truncation.
//!
//! Epoch labels lean on superscript digits and math symbols, so truncation
//! has to respect character boundaries and double-width glyphs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visual width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to `max_width` cells, appending "..." when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    if budget == 0 {
        return "...".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
