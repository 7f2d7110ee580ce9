//! 按显示宽度处理文本

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到指定显示宽度，超出部分以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // 给省略号留一列
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 右侧补空格到指定显示宽度（中文标签占两列）
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{:padding$}", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Tower A", 10), "Tower A");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate("/placeholder.svg?height=200", 10);
        assert_eq!(out, "/placehol…");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_chars_count_twice() {
        let out = truncate("面积面积面积", 5);
        assert_eq!(out, "面积…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn pad_right_uses_display_width() {
        assert_eq!(pad_right("Area", 6), "Area  ");
        assert_eq!(pad_right("面积", 6), "面积  ");
        assert_eq!(pad_right("Bathrooms", 4), "Bathrooms");
    }
}
