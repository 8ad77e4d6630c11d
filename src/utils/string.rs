/// Normalize raw cell text by replacing control characters with spaces and
/// normalizing whitespace (newlines inside merged header cells are common in
/// the source workbooks)
pub fn normalize_cell_text(value: &str) -> String {
    value
        .chars() // Process character by character
        .map(|c| {
            if c.is_control() {
                ' ' // Replace control characters (newlines, tabs, etc.) with spaces
            } else {
                c // Keep all other characters
            }
        })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ") // Join back with single spaces
}
