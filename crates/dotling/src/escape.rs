//! DOT string escaping, shared by attribute values and element names.

/// Backslash-escapes `\`, `'` and `"`; a NUL byte becomes the two characters
/// `\0`. This is the generic escaping for quoted identifiers and values.
pub(crate) fn escape_quoted(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' | '\'' | '"' => {
                out.push('\\');
                out.push(ch);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }
    out
}

/// GraphViz escString escaping (see
/// <https://www.graphviz.org/doc/info/attrs.html#k:escString>).
///
/// Prefixes `'`, `"` and NUL with a backslash. A backslash is doubled unless
/// it already introduces one of the escape sequences GraphViz understands
/// (`\\`, `\N`, `\G`, `\E`, `\T`, `\H`, `\L`, `\n`, `\l`, `\r`).
///
/// Single pass only: running this over its own output escapes it again.
pub(crate) fn escape_specials(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\'' | '"' | '\0' => {
                out.push('\\');
                out.push(ch);
            }
            '\\' => match chars.peek() {
                Some('\\' | 'N' | 'G' | 'E' | 'T' | 'H' | 'L' | 'n' | 'l' | 'r') => out.push(ch),
                _ => out.push_str("\\\\"),
            },
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_escaping_covers_slashes_quotes_and_nul() {
        assert_eq!(escape_quoted("a\"b"), "a\\\"b");
        assert_eq!(escape_quoted("a'b"), "a\\'b");
        assert_eq!(escape_quoted(r"a\b"), r"a\\b");
        assert_eq!(escape_quoted("a\0b"), "a\\0b");
        assert_eq!(escape_quoted("plain"), "plain");
    }

    #[test]
    fn specials_keep_recognized_escape_sequences() {
        for seq in [r"\N", r"\G", r"\E", r"\T", r"\H", r"\L", r"\n", r"\l", r"\r"] {
            assert_eq!(escape_specials(seq), seq);
        }
    }

    #[test]
    fn specials_protect_only_the_first_backslash_of_a_pair() {
        // The second backslash is re-examined against what follows it.
        assert_eq!(escape_specials(r"\\N"), r"\\N");
        assert_eq!(escape_specials(r"\\"), r"\\\");
        assert_eq!(escape_specials(r"\\x"), r"\\\x");
    }

    #[test]
    fn specials_double_bare_backslashes() {
        assert_eq!(
            escape_specials(r"\Acme\Descriptor\ProjectDescriptor"),
            r"\\Acme\\Descriptor\\ProjectDescriptor"
        );
    }

    #[test]
    fn specials_escape_quotes() {
        assert_eq!(escape_specials("a\"b\\cd"), "a\\\"b\\\\cd");
    }

    #[test]
    fn specials_escaping_is_single_pass_not_idempotent() {
        let once = escape_specials(r"\p");
        assert_eq!(once, r"\\p");
        assert_eq!(escape_specials(&once), r"\\\p");
    }
}
