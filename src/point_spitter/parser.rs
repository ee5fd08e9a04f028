// src/point_spitter/parser.rs

use crate::point_spitter::error::SplitterError;
use crate::point_spitter::models::{Roll, validate_roll};
use crate::point_spitter::regexes::{REG_COMMENT_RE, REG_ROLL_RE};

/// Parses a plain-text session log into the flat roll sequence it records.
///
/// Each line holds zero or more roll values separated by whitespace or
/// commas. `;` and `#` start comments that run to the end of the line; blank
/// lines are skipped. Rolls are returned in reading order.
///
/// # Errors
///
/// - [`SplitterError::MalformedLine`] for a token that is not a one- or
///   two-digit number, reported with its 1-based line number.
/// - [`SplitterError::RollOutOfRange`] for a numeric token outside 2..=12.
pub fn parse_session_log(content: &str) -> Result<Vec<Roll>, SplitterError> {
    let mut rolls = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line = REG_COMMENT_RE.replace(raw_line, "");
        let tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());
        for token in tokens {
            if !REG_ROLL_RE.is_match(token) {
                return Err(SplitterError::MalformedLine {
                    line: index + 1,
                    token: token.to_string(),
                });
            }
            // The regex caps tokens at two digits, so this cannot overflow u8.
            let value: Roll = token.parse().map_err(|_| SplitterError::MalformedLine {
                line: index + 1,
                token: token.to_string(),
            })?;
            validate_roll(value)?;
            rolls.push(value);
        }
    }
    Ok(rolls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_and_comma_separated_rolls() {
        let content = "7 2 3\n4,8,6\n12";
        assert_eq!(
            parse_session_log(content).unwrap(),
            vec![7, 2, 3, 4, 8, 6, 12]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = r#"
; warm-up rolls
7 11   ; two naturals
4 8 4  # point made

# trailing note
"#;
        assert_eq!(parse_session_log(content).unwrap(), vec![7, 11, 4, 8, 4]);
    }

    #[test]
    fn test_parse_comment_only_log_yields_no_rolls() {
        let content = "; nothing was rolled\n# still nothing\n";
        assert!(parse_session_log(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_malformed_tokens_with_line_numbers() {
        let content = "7 2\nsnake-eyes 3\n";
        assert_eq!(
            parse_session_log(content),
            Err(SplitterError::MalformedLine {
                line: 2,
                token: "snake-eyes".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_impossible_sums() {
        let content = "7 2\n13\n";
        assert_eq!(
            parse_session_log(content),
            Err(SplitterError::RollOutOfRange { value: 13 })
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_session_log("").unwrap().is_empty());
    }
}
