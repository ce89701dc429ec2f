//! Height grid decoding and min/max normalization.
//!
//! # Layout
//! ```text
//! [4 bytes] count_x (LE u32)
//! [4 bytes] count_z (LE u32)
//! [4 bytes] offset_x (LE f32)
//! [4 bytes] offset_z (LE f32)
//! [count_x * count_z * 4 bytes] samples (LE f32, row-major)
//! ```

use log::{debug, trace};

use crate::navgrid::cursor::ByteCursor;
use crate::navgrid::types::error::{DecodeStep, Result, StepExt};
use crate::navgrid::types::models::{HeightGrid, HeightRange, HeightSample};

const SAMPLE_SIZE: u64 = 4;

pub fn parse(cursor: &mut ByteCursor) -> Result<HeightGrid> {
    let count_x = cursor.read_u32_le().step(DecodeStep::HeightGridHeader)?;
    let count_z = cursor.read_u32_le().step(DecodeStep::HeightGridHeader)?;
    let offset_x = cursor.read_f32_le().step(DecodeStep::HeightGridHeader)?;
    let offset_z = cursor.read_f32_le().step(DecodeStep::HeightGridHeader)?;
    debug!(
        "Height grid: {}x{} samples, offset=({}, {})",
        count_x, count_z, offset_x, offset_z
    );

    let total = count_x as u64 * count_z as u64;
    cursor.ensure_records(DecodeStep::HeightSamples, total, SAMPLE_SIZE)?;

    let mut raw = Vec::with_capacity(total as usize);
    for _ in 0..total {
        raw.push(cursor.read_f32_le().step(DecodeStep::HeightSamples)?);
    }
    trace!("Height samples read, cursor at offset {}", cursor.tell());

    let (samples, range) = normalize(&raw);
    Ok(HeightGrid {
        count_x,
        count_z,
        offset_x,
        offset_z,
        samples,
        range,
    })
}

/// Computes the range of `raw` and each sample's position within it.
///
/// The range is seeded from the first finite sample; NaN and infinite
/// samples are left out of it and normalize to `0.0`. A flat grid
/// (`max == min`) normalizes every sample to `0.0`. A slice with no finite
/// sample yields no range.
pub fn normalize(raw: &[f32]) -> (Vec<HeightSample>, Option<HeightRange>) {
    let mut finite = raw.iter().copied().filter(|h| h.is_finite());
    let range = finite.next().map(|first| {
        finite.fold(HeightRange { min: first, max: first }, |acc, h| HeightRange {
            min: if h < acc.min { h } else { acc.min },
            max: if h > acc.max { h } else { acc.max },
        })
    });

    let skipped = raw.iter().filter(|h| !h.is_finite()).count();
    if skipped > 0 {
        debug!("{} non-finite height samples left out of the range", skipped);
    }

    let samples = raw
        .iter()
        .map(|&h| HeightSample {
            raw: h,
            normalized: range.map_or(0.0, |range| position_in(h, range)),
        })
        .collect();

    (samples, range)
}

fn position_in(h: f32, range: HeightRange) -> f32 {
    let span = range.span();
    if !h.is_finite() || span == 0.0 {
        return 0.0;
    }
    ((f64::from(h) - f64::from(range.min)) / span) as f32
}
