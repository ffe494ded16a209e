//! Off-screen rendering to plain text.
//!
//! Used by the `render` command and by tests to inspect what a view draws.

use ratatui::buffer::Buffer;

/// Convert a rendered buffer to text, one line per row, trailing spaces trimmed
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
