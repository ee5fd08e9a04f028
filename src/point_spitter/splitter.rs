// src/point_spitter/splitter.rs

use crate::point_spitter::error::SplitterError;
use crate::point_spitter::models::{ONE_ROLL_RESOLUTIONS, Roll, validate_roll};

/// Splits a roll sequence into its first point cycle and the unconsumed rest.
///
/// The first roll is the come-out roll of a craps betting round:
/// - A 2, 3, 7, 11 or 12 resolves the round on the spot, so the point cycle
///   is that single roll and everything after it is the remainder.
/// - Any other value (4, 5, 6, 8, 9 or 10) establishes the point. The
///   following rolls are scanned left to right for the first roll equal to 7
///   or to the point; the point cycle runs up to and including that roll.
///   Only the leftmost terminator counts, never a later one.
/// - If no terminator appears before the input ends, the whole input is the
///   (unresolved) point cycle and the remainder is empty.
///
/// Concatenating the returned point cycle and remainder always reproduces the
/// input exactly. Reapplying the function to successive remainders walks
/// through every point cycle of a session in order.
///
/// # Errors
///
/// Returns [`SplitterError::EmptySequence`] for empty input and
/// [`SplitterError::RollOutOfRange`] if any element is not a possible
/// two-dice sum (outside 2..=12).
///
/// # Examples
///
/// ```text
/// [7, 2, 3]            ->  ([7], [2, 3])
/// [4, 8, 6, 4, 12, 11] ->  ([4, 8, 6, 4], [12, 11])
/// [4, 8, 7, 9, 10, 11] ->  ([4, 8, 7], [9, 10, 11])
/// [4, 5, 6]            ->  ([4, 5, 6], [])
/// ```
pub fn split_at_point_cycle(rolls: &[Roll]) -> Result<(Vec<Roll>, Vec<Roll>), SplitterError> {
    let (&come_out, rest) = rolls.split_first().ok_or(SplitterError::EmptySequence)?;
    for &roll in rolls {
        validate_roll(roll)?;
    }

    if ONE_ROLL_RESOLUTIONS.contains(&come_out) {
        return Ok((vec![come_out], rest.to_vec()));
    }

    // Come-out established a point; scan for the first seven or point repeat.
    let point = come_out;
    match rest.iter().position(|&roll| roll == 7 || roll == point) {
        Some(i) => Ok((rolls[..=i + 1].to_vec(), rolls[i + 2..].to_vec())),
        None => Ok((rolls.to_vec(), Vec::new())),
    }
}
