//! Display formatting for dashboard values.

/// Format whole numbers with thousand separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a whole-dollar amount, e.g. `$5,000,000`
pub fn format_currency(dollars: u64) -> String {
    format!("${}", format_number(dollars))
}

/// Truncate to `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5_000_000), "$5,000,000");
        assert_eq!(format_currency(999), "$999");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Circular Economy", 40), "Circular Economy");
        assert_eq!(truncate("Decarbonizing Built Environment", 10), "Decarboni…");
        assert_eq!(truncate("abc", 0), "");
    }
}
