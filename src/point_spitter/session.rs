// src/point_spitter/session.rs

use crate::point_spitter::error::SplitterError;
use crate::point_spitter::models::{PointCycle, Roll};
use crate::point_spitter::splitter::split_at_point_cycle;

/// Enumerates every point cycle of a session in order by repeatedly applying
/// the splitter to successive remainders until the input is consumed.
///
/// The cycles, concatenated in order, reproduce the input exactly. An empty
/// session yields an empty list; the splitter itself is never invoked on
/// empty input.
///
/// # Errors
///
/// Propagates [`SplitterError::RollOutOfRange`] from the splitter if any
/// element is not a possible two-dice sum.
pub fn split_session(rolls: &[Roll]) -> Result<Vec<PointCycle>, SplitterError> {
    let mut cycles = Vec::new();
    let mut rest = rolls.to_vec();
    while !rest.is_empty() {
        let (cycle, remainder) = split_at_point_cycle(&rest)?;
        cycles.push(PointCycle::classify(cycle));
        rest = remainder;
    }
    Ok(cycles)
}
