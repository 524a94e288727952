//! Text sanitization and greedy word-wrapping for slide rendering.

/// Collapse whitespace runs to single spaces, normalize curly quotes to a
/// plain apostrophe, and trim.
pub fn sanitize(text: &str) -> String {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201F}' => '\'',
            c if c.is_whitespace() => ' ',
            c => c,
        })
        .collect();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word-wrap: words are appended to the current line while they fit
/// within `max_chars`. A single word longer than `max_chars` stays whole on
/// its own line, never split mid-word.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace_and_quotes() {
        assert_eq!(
            sanitize("  It\u{2019}s   a\n\ttest  "),
            "It's a test"
        );
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n  "), "");
    }

    #[test]
    fn curly_quotes_all_normalize_to_apostrophe() {
        assert_eq!(
            sanitize("\u{201C}quoted\u{201D} and \u{2018}single\u{2019}"),
            "'quoted' and 'single'"
        );
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {line:?}");
        }
    }

    #[test]
    fn wrap_rejoins_to_normalized_input() {
        let input = "the quick   brown fox\njumps over the lazy dog";
        let lines = wrap(input, 12);
        assert_eq!(lines.join(" "), sanitize(input));
    }

    #[test]
    fn overlong_word_stays_whole_on_its_own_line() {
        let lines = wrap("a supercalifragilistic word", 10);
        assert_eq!(
            lines,
            vec!["a", "supercalifragilistic", "word"]
        );
    }

    #[test]
    fn empty_input_wraps_to_no_lines() {
        assert!(wrap("", 30).is_empty());
        assert!(wrap("   ", 30).is_empty());
    }

    #[test]
    fn exact_fit_does_not_split() {
        let lines = wrap("ab cd", 5);
        assert_eq!(lines, vec!["ab cd"]);
    }
}
