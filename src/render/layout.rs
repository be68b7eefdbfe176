//! Text wrapping for card faces.

use smallvec::SmallVec;

use super::font;

/// Wrapped lines of a text block.
pub type Lines = SmallVec<[String; 8]>;

/// How many characters fit on a line of `width` pixels at `scale`.
#[must_use]
pub fn chars_per_line(width: u32, scale: u32) -> usize {
    let advance = font::ADVANCE * scale.max(1);
    (width / advance).max(1) as usize
}

/// Greedy word wrap.
///
/// Explicit newlines start a new line. Words longer than a line are broken
/// across lines.
#[must_use]
pub fn wrap(text: &str, max_chars: usize) -> Lines {
    let max_chars = max_chars.max(1);
    let mut lines = Lines::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let extra = if current_len == 0 { word.len() } else { word.len() + 1 };
            if current_len + extra > max_chars && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        if current_len > 0 || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Pixel height of `line_count` lines at `scale`.
#[must_use]
pub fn block_height(line_count: usize, scale: u32) -> u32 {
    line_count as u32 * font::LINE_HEIGHT * scale.max(1)
}
