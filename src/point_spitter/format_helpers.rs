// src/point_spitter/format_helpers.rs

use crate::point_spitter::models::{PointCycle, Roll};

/// Formats the `;`-commented header that introduces one cycle in the report.
pub fn format_cycle_header(index: usize, cycle: &PointCycle) -> String {
    format!(
        "; --- cycle {}: {} ({} rolls) ---",
        index,
        cycle.outcome.label(),
        cycle.rolls.len()
    )
}

/// Formats a roll sequence as a single space-separated line.
pub fn format_roll_sequence(rolls: &[Roll]) -> String {
    rolls
        .iter()
        .map(|roll| roll.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cycle_header() {
        let cycle = PointCycle::classify(vec![4, 8, 7]);
        assert_eq!(
            format_cycle_header(2, &cycle),
            "; --- cycle 2: seven-out (3 rolls) ---"
        );
    }

    #[test]
    fn test_format_roll_sequence() {
        assert_eq!(format_roll_sequence(&[4, 8, 6, 4]), "4 8 6 4");
        assert_eq!(format_roll_sequence(&[12]), "12");
        assert_eq!(format_roll_sequence(&[]), "");
    }
}
