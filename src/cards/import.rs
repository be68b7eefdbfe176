//! Bulk card import from pasted text.
//!
//! One card title per line. A trailing `(N)` asks for N copies:
//!
//! ```text
//! Potion (3)
//! Sword
//! ```
//!
//! creates three "Potion" cards and one "Sword". Blank lines are skipped.
//! A suffix whose contents are not a count is part of the title.

use smallvec::SmallVec;

/// One parsed import line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportLine {
    pub title: String,
    pub copies: usize,
}

/// Parse pasted text into titles and copy counts, in input order.
#[must_use]
pub fn parse_import_text(text: &str) -> SmallVec<[ImportLine; 8]> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ImportLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(open) = line.rfind('(') {
        if let Some(inner) = line[open + 1..].strip_suffix(')') {
            if let Ok(copies) = inner.trim().parse::<usize>() {
                return Some(ImportLine {
                    title: line[..open].trim_end().to_string(),
                    copies,
                });
            }
        }
    }

    Some(ImportLine {
        title: line.to_string(),
        copies: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        let lines = parse_import_text("Potion (3)\nSword");
        assert_eq!(
            lines.as_slice(),
            [
                ImportLine { title: "Potion".into(), copies: 3 },
                ImportLine { title: "Sword".into(), copies: 1 },
            ]
        );
    }

    #[test]
    fn test_skips_blank_lines_and_crlf() {
        let lines = parse_import_text("\r\n  Orc  \r\n\r\nGoblin(2)\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].title, "Orc");
        assert_eq!(lines[1], ImportLine { title: "Goblin".into(), copies: 2 });
    }

    #[test]
    fn test_non_numeric_suffix_is_title() {
        let lines = parse_import_text("Boots (of Running)");
        assert_eq!(lines[0], ImportLine { title: "Boots (of Running)".into(), copies: 1 });
    }

    #[test]
    fn test_zero_copies() {
        let lines = parse_import_text("Curse (0)");
        assert_eq!(lines[0].copies, 0);
    }
}
