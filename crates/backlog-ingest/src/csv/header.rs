//! CSV header line parsing.

/// Parses a CSV line into trimmed fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => in_quotes = true,
            '"' => {
                // "" inside quotes is a literal quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(
            parse_csv_line("IGDB ID,Game name,Status"),
            vec!["IGDB ID", "Game name", "Status"]
        );
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"Rating (Score)\",\"Tags, custom\",Playtime");
        assert_eq!(result, vec!["Rating (Score)", "Tags, custom", "Playtime"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"the \"\"best\"\" one\",b");
        assert_eq!(result, vec!["the \"best\" one", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trimmed() {
        assert_eq!(parse_csv_line("  a  ,  b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trailing_empty_field() {
        assert_eq!(parse_csv_line("a,"), vec!["a", ""]);
    }
}
