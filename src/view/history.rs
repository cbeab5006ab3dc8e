//! History list rendering.

use crate::domain::HistoryEntry;

/// Renders history rows: the date on its own line, then the memo text
/// indented beneath it.
///
/// With `width`, each preview line is cut to that many characters.
pub fn render_history(entries: &[HistoryEntry], width: Option<usize>) -> String {
    if entries.is_empty() {
        return "メモはまだありません。\n".to_string();
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", index + 1, entry.date));
        for line in entry.content.lines() {
            let line = match width {
                Some(w) => truncate_str(line, w),
                None => line.to_string(),
            };
            out.push_str("     ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
