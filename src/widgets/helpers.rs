//! Formatting helpers shared by the widgets and panels.

/// Shorten a hash or address to `max_len` characters, keeping both ends.
///
/// ```text
/// truncate_key("0x1234567890abcdef", 11) == "0x12...cdef"
/// ```
#[must_use]
pub fn truncate_key(key: &str, max_len: usize) -> String {
    let char_count = key.chars().count();
    if char_count <= max_len {
        return key.to_string();
    }

    if max_len < 7 {
        return key.chars().take(max_len).collect();
    }

    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = key.chars().take(prefix_len).collect();
    let suffix: String = key.chars().skip(char_count - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

/// Display an amount without trailing zeros (`2`, `1.5`, `-0.25`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

/// Label for a flow graph node, naming the pivot explicitly.
#[must_use]
pub fn node_label(key: &str, max_len: usize) -> String {
    if key.is_empty() {
        "(txn)".to_string()
    } else {
        truncate_key(key, max_len)
    }
}
