//! Ordered band tables mapping a driving value (distance or row) to a height divisor.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// A contiguous range of the driving value, `[previous.below, below)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Exclusive upper bound of the band.
    pub below: f64,
    /// Maximum height is divided by this factor inside the band.
    pub divisor: f64,
}

impl Band {
    pub const fn new(below: f64, divisor: f64) -> Self {
        Self { below, divisor }
    }
}

/// Ordered list of bands, innermost first; first match wins.
///
/// A value exactly on a boundary belongs to the outer band because every upper
/// bound is exclusive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub bands: Vec<Band>,
}

impl BandTable {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Divisor of the first band whose bound exceeds `value`, or `None` when
    /// `value` lies beyond every band.
    pub fn divisor_for(&self, value: f64) -> Option<f64> {
        self.bands
            .iter()
            .find(|band| value < band.below)
            .map(|band| band.divisor)
    }

    /// Exclusive upper bound of the outermost band.
    pub fn outer_bound(&self) -> Option<f64> {
        self.bands.last().map(|band| band.below)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Check that bounds strictly increase and every divisor is finite and positive.
    pub fn validate(&self) -> Result<(), TerrainError> {
        let mut previous = f64::NEG_INFINITY;
        for (index, band) in self.bands.iter().enumerate() {
            if band.below.is_nan() || band.below <= previous {
                return Err(TerrainError::BandOrder {
                    index,
                    bound: band.below,
                    previous,
                });
            }
            validate_divisor(index, band.divisor)?;
            previous = band.below;
        }
        Ok(())
    }
}

pub(crate) fn validate_divisor(index: usize, divisor: f64) -> Result<(), TerrainError> {
    if divisor.is_finite() && divisor > 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidDivisor { index, divisor })
    }
}
