const PREVIEW_CHARS: usize = 30;
const ELLIPSIS: &str = "...";

/// First 30 characters of `content`, with `...` appended if anything was cut.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.into(),
    }
}

pub fn move_window(start: usize, height: usize, new_index: usize) -> Option<usize> {
    if height == 0 {
        return None;
    }

    let mut new_start = start;

    if new_index < start {
        new_start = new_index;
    } else if new_index > start.saturating_add(height.saturating_sub(1)) {
        new_start = new_index - (height.saturating_sub(1));
    }

    Some(new_start)
}

/// Cuts `line` to at most `width` characters.
pub fn clip(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((cut, _)) => &line[..cut],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_preview_boundaries() {
        assert_eq!(preview(""), "");
        assert_eq!(preview("short"), "short");
        assert_eq!(preview(&"a".repeat(30)), "a".repeat(30));
        assert_eq!(preview(&"a".repeat(31)), format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn test_preview_counts_characters() {
        // 31 two-byte characters
        let cyrillic = "я".repeat(31);
        assert_eq!(preview(&cyrillic), format!("{}...", "я".repeat(30)));
        assert_eq!(preview(&"я".repeat(30)), "я".repeat(30));
    }

    #[quickcheck]
    fn test_preview(content: String) -> bool {
        let shown = preview(&content);

        if content.chars().count() <= 30 {
            shown == content
        } else {
            shown.ends_with("...")
                && shown.chars().count() == 33
                && content.starts_with(&shown[..shown.len() - 3])
        }
    }

    #[quickcheck]
    fn test_clip(line: String, width: u8) -> bool {
        let width = width as usize;
        let clipped = clip(&line, width);
        clipped.chars().count() <= width && line.starts_with(clipped)
    }

    #[quickcheck]
    fn test_move_window(start: usize, height: usize, index: usize) -> bool {
        if let Some(new_start) = move_window(start, height, index) {
            // Do not move when unnecessary...
            if start <= index && index <= start.saturating_add(height - 1) {
                new_start == start
            } else {
                // ...and always be in range...
                new_start <= index && index <= new_start.saturating_add(height)
            }
        } else {
            // If move_window returned None, the height must have been 0
            height == 0
        }
    }
}
