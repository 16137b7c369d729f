/// Greedy word wrap at `width` characters; always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_owned()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }
    match max_chars {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("frame 12 truncated", 40), ["frame 12 truncated"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("expected 19 atoms per frame", 12),
            ["expected 19", "atoms per", "frame"]
        );
    }

    #[test]
    fn wrap_of_blank_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), [""]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("ALA", 3), "ALA");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("run_0001.dump", 8), "run_000…");
        assert_eq!(truncate("Cα·Cβ·O", 3), "Cα…");
        assert_eq!(truncate("abc", 0), "");
    }
}
