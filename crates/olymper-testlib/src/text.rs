//! Helpers for diagnostic messages.

const COMPRESS_LIMIT: usize = 64;
const COMPRESS_HEAD: usize = 30;
const COMPRESS_TAIL: usize = 31;

/// Shorten a token for display: long strings keep their head and tail.
pub fn compress(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= COMPRESS_LIMIT {
        return s.to_string();
    }
    let head: String = chars[..COMPRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - COMPRESS_TAIL..].iter().collect();
    format!("{head}...{tail}")
}

/// Ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn english_ending(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_short_unchanged() {
        assert_eq!(compress("FIRST"), "FIRST");
        let exact = "x".repeat(COMPRESS_LIMIT);
        assert_eq!(compress(&exact), exact);
    }

    #[test]
    fn test_compress_long() {
        let long: String = ('a'..='z').cycle().take(100).collect();
        let out = compress(&long);
        assert_eq!(out.chars().count(), COMPRESS_HEAD + 3 + COMPRESS_TAIL);
        assert!(out.starts_with(&long[..COMPRESS_HEAD]));
        assert!(out.ends_with(&long[100 - COMPRESS_TAIL..]));
    }

    #[test]
    fn test_english_ending() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (102, "nd"),
            (111, "th"),
        ];
        for (n, want) in cases {
            assert_eq!(english_ending(n), want, "n = {n}");
        }
    }
}
