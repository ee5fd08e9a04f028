// src/point_spitter/regexes.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a roll token: one or two decimal digits, nothing else.
pub static REG_ROLL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").unwrap());

/// Matches a trailing comment. Both `;` and `#` start a comment that runs to
/// the end of the line.
pub static REG_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;#].*$").unwrap());
