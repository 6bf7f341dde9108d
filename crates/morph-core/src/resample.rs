// File: crates/morph-core/src/resample.rs
// Summary: Index mapping between an old and a new point sequence of different lengths.

use log::debug;

use crate::error::ChartError;
use crate::point::Point;

/// Build the working sequence that morphs `old` into `new` over `steps` ticks.
///
/// - Growing (`old.len() < new.len()`): one working point per new point.
///   Point `j` starts on `old[floor(j / k)]` with `k = M / N` and heads for
///   `new[j]`, so every old point fans out into a group of new ones.
/// - Shrinking or equal: one working point per old point. Point `i` keeps
///   its position and heads for `new[floor(i / k)]` with `k = N / M`, so
///   groups of old points collapse onto a shared new one.
///
/// Indices are floored in integer arithmetic: `floor(j / (M / N))` is
/// `j * N / M`, which never reaches past the last element.
pub fn resample(old: &[Point], new: &[Point], steps: u32) -> Result<Vec<Point>, ChartError> {
    let (n, m) = (old.len(), new.len());
    if n == 0 || m == 0 {
        return Err(ChartError::InvalidPointCount { old: n, new: m });
    }
    let steps = steps.max(1);

    let working: Vec<Point> = if n < m {
        new.iter()
            .enumerate()
            .map(|(j, dest)| {
                let src = &old[group_index(j, n, m)];
                Point::transition(src.coordinates(), dest.coordinates(), steps)
            })
            .collect()
    } else {
        old.iter()
            .enumerate()
            .map(|(i, src)| {
                let dest = &new[group_index(i, m, n)];
                Point::transition(src.coordinates(), dest.coordinates(), steps)
            })
            .collect()
    };

    debug!("resampled {} -> {} points ({} working, {} steps)", n, m, working.len(), steps);
    Ok(working)
}

/// `floor(index / (from_len / to_len))` mapped into a sequence of `to_len`
/// items, for `index < from_len`.
#[inline]
pub fn group_index(index: usize, to_len: usize, from_len: usize) -> usize {
    (index * to_len / from_len).min(to_len - 1)
}
