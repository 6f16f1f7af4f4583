//! Quote-aware splitting of a single export line.

/// Split `line` on `delimiter`, ignoring delimiters inside double quotes.
///
/// Every `"` toggles the quoted state and is dropped from the output; there
/// is no escape syntax. Fields are trimmed. The trailing field is always
/// emitted, so a line without delimiters yields exactly one field.
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_delimiter_kept_in_field() {
        assert_eq!(tokenize_line(r#"a,"b,c",d"#, ','), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(tokenize_line(" 主叫 , 13800138000 ,x", ','), vec!["主叫", "13800138000", "x"]);
    }

    #[test]
    fn test_no_delimiter_yields_single_field() {
        assert_eq!(tokenize_line("合计", ','), vec!["合计"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_field() {
        assert_eq!(tokenize_line("", ','), vec![""]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_last_field() {
        assert_eq!(tokenize_line("a,b,", ','), vec!["a", "b", ""]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(tokenize_line(r#"a,"b,c,d"#, ','), vec!["a", "b,c,d"]);
    }

    #[test]
    fn test_quote_state_does_not_leak_between_calls() {
        let _ = tokenize_line(r#"x,"open"#, ',');
        assert_eq!(tokenize_line("a,b", ','), vec!["a", "b"]);
    }

    #[test]
    fn test_other_delimiter() {
        assert_eq!(tokenize_line("a\t\"b\tc\"\td", '\t'), vec!["a", "b\tc", "d"]);
    }
}
