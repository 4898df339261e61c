//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}

/// Center a string within `width` columns.
pub fn center(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        return s.to_string();
    }
    let left = (width - char_count) / 2;
    let right = width - char_count - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Money with two decimals and the currency suffix (`2400.00 руб.`).
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}
