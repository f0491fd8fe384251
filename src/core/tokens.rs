/// Split a comma-separated field into normalized tokens
///
/// Each piece is trimmed and lower-cased; empty pieces are dropped and
/// repeated tokens collapse onto their first occurrence. `None` yields an
/// empty list.
pub fn parse_tokens(input: Option<&str>) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for token in input.unwrap_or_default().split(',').map(normalize_token) {
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }

    tokens
}

/// Trim and lower-case a single token
#[inline]
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_basic() {
        assert_eq!(
            parse_tokens(Some("JavaScript, React ,node.js")),
            vec!["javascript", "react", "node.js"]
        );
    }

    #[test]
    fn test_parse_tokens_empty_input() {
        assert!(parse_tokens(None).is_empty());
        assert!(parse_tokens(Some("")).is_empty());
        assert!(parse_tokens(Some("  ,  , ")).is_empty());
    }

    #[test]
    fn test_parse_tokens_dedup_keeps_first() {
        assert_eq!(
            parse_tokens(Some("python, Python ,sql,python")),
            vec!["python", "sql"]
        );
    }

    #[test]
    fn test_inner_whitespace_kept() {
        assert_eq!(parse_tokens(Some(" Machine  Learning ")), vec!["machine  learning"]);
    }
}
