//! Whitespace tokenizing helpers.
//!
//! Both helpers split on Unicode whitespace only. There is no shell-style
//! quoting: a quoted value containing spaces becomes several tokens.

/// Split a free-text option string into command-line arguments.
///
/// Runs of whitespace collapse; leading and trailing whitespace is ignored.
pub fn split_options(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split_whitespace().map(str::to_string)
}

/// Drop the first `n` whitespace-delimited tokens of `line` and return the
/// rest of the line, trimmed, with its inner spacing intact.
///
/// Returns `None` when the line has fewer than `n` tokens.
pub fn skip_tokens(line: &str, n: usize) -> Option<&str> {
    let mut rest = line;
    for _ in 0..n {
        rest = rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    Some(rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_collapses_whitespace_runs() {
        let tokens: Vec<String> = split_options("--x 1  --y").collect();
        assert_eq!(tokens, vec!["--x", "1", "--y"]);
    }

    #[test]
    fn split_ignores_surrounding_whitespace_and_tabs() {
        let tokens: Vec<String> = split_options("\t --a\n\n--b=c  ").collect();
        assert_eq!(tokens, vec!["--a", "--b=c"]);
    }

    #[test]
    fn split_empty_yields_nothing() {
        assert_eq!(split_options("").count(), 0);
        assert_eq!(split_options("   ").count(), 0);
    }

    #[test]
    fn split_does_not_honour_quotes() {
        let tokens: Vec<String> = split_options(r#"--name "two words""#).collect();
        assert_eq!(tokens, vec!["--name", "\"two", "words\""]);
    }

    #[test]
    fn skip_keeps_inner_spacing_of_remainder() {
        assert_eq!(
            skip_tokens("a  b c d  keep   this spacing  ", 4),
            Some("keep   this spacing")
        );
    }

    #[test]
    fn skip_exactly_all_tokens_leaves_empty_remainder() {
        assert_eq!(skip_tokens("a b c d", 4), Some(""));
    }

    #[test]
    fn skip_more_than_available_is_none() {
        assert_eq!(skip_tokens("a b c", 4), None);
        assert_eq!(skip_tokens("   ", 1), None);
    }

    #[test]
    fn skip_zero_only_trims() {
        assert_eq!(skip_tokens("  x y ", 0), Some("x y"));
    }
}
