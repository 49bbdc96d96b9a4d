//! Text layout primitives for help rendering.
//!
//! Tab expansion and greedy word wrapping. Both operate on characters, not
//! bytes, and neither knows anything about options; the help renderer is the
//! only consumer.

/// Replace each tab with enough spaces to reach the next multiple of
/// `tab_stop`. The column counter resets on every newline.
pub fn expand_tabs(input: &str, tab_stop: usize) -> String {
    let mut expanded = String::with_capacity(input.len());
    let mut column = 0;
    for c in input.chars() {
        if c == '\t' {
            let next_tab = (column + tab_stop) - ((column + tab_stop) % tab_stop);
            while column < next_tab {
                expanded.push(' ');
                column += 1;
            }
        } else {
            expanded.push(c);
            column += 1;
            if c == '\n' {
                column = 0;
            }
        }
    }
    expanded
}

/// Greedily wrap `input` to at most `columns` characters per line.
///
/// Input is split on newlines first; each line is then packed left to right,
/// breaking at the most recent whitespace once one character before the
/// limit is reached (the break whitespace is discarded). A line with no
/// whitespace before the limit is hard-broken. Widths below 2 are a caller
/// bug and are clamped up.
pub fn wrap_words(input: &str, columns: usize) -> Vec<String> {
    debug_assert!(columns >= 2, "wrap width must be at least 2");
    let columns = columns.max(2);

    let mut lines = Vec::new();
    for line in input.split('\n') {
        wrap_line(&mut lines, line, columns);
    }
    lines
}

fn wrap_line(out: &mut Vec<String>, line: &str, columns: usize) {
    let chars: Vec<char> = line.chars().collect();
    // Allow room for the implicit newline.
    let max_column = columns - 1;

    let mut line_start = 0;
    let mut column = 0;
    let mut last_space: Option<usize> = None;
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_whitespace() {
            last_space = Some(i);
        }

        if column == max_column {
            // Final allowed column reached: trim at the last space or, if
            // none was seen, hard stop here.
            let line_end = match last_space {
                Some(space) => gobble_trailing_whitespace(&chars, space),
                None => i,
            };
            out.push(chars[line_start..line_end].iter().collect());

            line_start = gobble_leading_whitespace(&chars, line_end);
            i = line_start;
            column = 0;
            last_space = None;
        } else {
            column += 1;
            i += 1;
        }
    }
    out.push(chars[line_start..].iter().collect());
}

fn gobble_trailing_whitespace(chars: &[char], mut end_idx: usize) -> usize {
    while end_idx > 0 && chars[end_idx - 1].is_whitespace() {
        end_idx -= 1;
    }
    end_idx
}

fn gobble_leading_whitespace(chars: &[char], mut start_idx: usize) -> usize {
    while start_idx < chars.len() && chars[start_idx].is_whitespace() {
        start_idx += 1;
    }
    start_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_advance_to_next_stop() {
        assert_eq!(expand_tabs("\ta", 2), "  a");
        assert_eq!(expand_tabs("a\tb", 2), "a b");
        assert_eq!(expand_tabs("ab\tc", 2), "ab  c");
        assert_eq!(expand_tabs("abc\td", 4), "abc d");
    }

    #[test]
    fn tab_column_resets_on_newline() {
        assert_eq!(expand_tabs("ab\n\tc", 2), "ab\n  c");
    }

    #[test]
    fn expansion_without_tabs_is_identity() {
        assert_eq!(expand_tabs("plain text", 2), "plain text");
        assert_eq!(expand_tabs("", 2), "");
    }

    #[test]
    fn short_input_is_not_wrapped() {
        assert_eq!(wrap_words("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn breaks_at_last_space_before_limit() {
        assert_eq!(wrap_words("one two three four", 11), vec!["one two", "three four"]);
    }

    #[test]
    fn break_whitespace_is_discarded() {
        let lines = wrap_words("alpha beta gamma delta", 12);
        for line in &lines {
            assert_eq!(line.trim(), line.as_str(), "line keeps stray whitespace: {line:?}");
        }
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn hard_break_without_whitespace() {
        assert_eq!(wrap_words("abcdefghij", 5), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn existing_newlines_are_respected() {
        assert_eq!(wrap_words("one\ntwo", 40), vec!["one", "two"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap_words("", 40), vec![""]);
    }

    #[test]
    fn narrow_width_is_clamped_in_release() {
        // Contract violation in debug builds; release clamps to 2.
        if !cfg!(debug_assertions) {
            assert_eq!(wrap_words("ab", 1), vec!["a", "b"]);
        }
    }
}
