//! Text measurement and wrapping for tooltip boxes and labels.

/// Heuristic pixel width of `text` (neither backend measures text for us).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Greedy word wrap to `max_px`; words longer than a line are hard-broken.
pub fn wrap_text_to_width(text: &str, font_px: u32, max_px: u32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            cur = candidate;
            continue;
        }
        if !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
        }
        for ch in word.chars() {
            let next = format!("{cur}{ch}");
            if !cur.is_empty() && estimate_text_width_px(&next, font_px) > max_px {
                lines.push(std::mem::replace(&mut cur, ch.to_string()));
            } else {
                cur = next;
            }
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Escape the five XML special characters.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_words_and_breaks_long_ones() {
        // 12px font: 7.2px per char, 100px fits 13 chars
        let lines = wrap_text_to_width("Who Shot Mr. Burns? (Part Two)", 12, 100);
        assert!(lines.iter().all(|l| estimate_text_width_px(l, 12) <= 100));
        assert_eq!(lines.join(" "), "Who Shot Mr. Burns? (Part Two)");

        let lines = wrap_text_to_width("Supercalifragilistic", 12, 50);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "Supercalifragilistic");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(xml_escape(r#"Bart & "Lisa" <3"#), "Bart &amp; &quot;Lisa&quot; &lt;3");
    }
}
