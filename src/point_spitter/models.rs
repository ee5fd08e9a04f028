// src/point_spitter/models.rs

use serde::Serialize;

use crate::point_spitter::error::SplitterError;

/// The sum of two six-sided dice. Valid values are 2 through 12.
pub type Roll = u8;

/// Come-out values that resolve a betting round on the spot: naturals (7, 11)
/// and craps (2, 3, 12).
pub const ONE_ROLL_RESOLUTIONS: [Roll; 5] = [2, 3, 7, 11, 12];

/// Come-out values that establish a point.
pub const POINT_VALUES: [Roll; 6] = [4, 5, 6, 8, 9, 10];

/// Checks that a roll is a possible two-dice sum.
pub fn validate_roll(value: Roll) -> Result<(), SplitterError> {
    if (2..=12).contains(&value) {
        Ok(())
    } else {
        Err(SplitterError::RollOutOfRange { value })
    }
}

/// Returns true if `value` establishes a point on the come-out roll.
pub fn establishes_point(value: Roll) -> bool {
    POINT_VALUES.contains(&value)
}

/// How a point cycle ended.
///
/// The split itself never depends on this; it exists so session reports can
/// label each cycle. `Unresolved` marks a trailing cycle whose terminator
/// never appeared before the log ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleOutcome {
    Natural,
    Craps,
    PointMade,
    SevenOut,
    Unresolved,
}

impl CycleOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CycleOutcome::Natural => "natural",
            CycleOutcome::Craps => "craps",
            CycleOutcome::PointMade => "point made",
            CycleOutcome::SevenOut => "seven-out",
            CycleOutcome::Unresolved => "unresolved",
        }
    }
}

/// One complete betting round: the come-out roll plus, if it established a
/// point, every roll up to and including the resolving one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointCycle {
    pub rolls: Vec<Roll>,
    pub outcome: CycleOutcome,
}

impl PointCycle {
    /// Wraps a run of rolls produced by the splitter and labels its outcome.
    /// The first roll is the come-out; the run is expected to be non-empty
    /// and already split at the cycle boundary.
    pub fn classify(rolls: Vec<Roll>) -> Self {
        let outcome = match rolls.split_first() {
            None => CycleOutcome::Unresolved,
            Some((&come_out, rest)) => {
                if establishes_point(come_out) {
                    match rest.last() {
                        Some(&7) => CycleOutcome::SevenOut,
                        Some(&last) if last == come_out => CycleOutcome::PointMade,
                        _ => CycleOutcome::Unresolved,
                    }
                } else if come_out == 7 || come_out == 11 {
                    CycleOutcome::Natural
                } else {
                    CycleOutcome::Craps
                }
            }
        };
        PointCycle { rolls, outcome }
    }

    pub fn come_out(&self) -> Option<Roll> {
        self.rolls.first().copied()
    }
}
