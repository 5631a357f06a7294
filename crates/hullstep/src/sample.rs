//! Reproducible point sets inside a drawing area.
//!
//! Model
//! - `count` points with integer-valued coordinates, uniform in
//!   `[0, width - diameter) x [0, height - diameter)` so a marker of the given
//!   diameter stays fully inside the area.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{pt, Point};

/// Sampler configuration (drawing area in pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub count: usize,
    pub width: u32,
    pub height: u32,
    /// Marker diameter; shrinks the usable area on the right and bottom.
    pub diameter: u32,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 50,
            width: 700,
            height: 700,
            diameter: 10,
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.count < 2 {
            return Err(SampleError::TooFewPoints { count: self.count });
        }
        if self.width <= self.diameter || self.height <= self.diameter {
            return Err(SampleError::EmptyArea {
                width: self.width,
                height: self.height,
                diameter: self.diameter,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    TooFewPoints { count: usize },
    EmptyArea { width: u32, height: u32, diameter: u32 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } => {
                write!(f, "use a higher amount of points (2 or more), got {count}")
            }
            Self::EmptyArea {
                width,
                height,
                diameter,
            } => write!(
                f,
                "drawing area {width}x{height} leaves no room for markers of diameter {diameter}"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `cfg.count` points for the given token.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Point>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let w = cfg.width - cfg.diameter;
    let h = cfg.height - cfg.diameter;
    Ok((0..cfg.count)
        .map(|_| pt(f64::from(rng.gen_range(0..w)), f64::from(rng.gen_range(0..h))))
        .collect())
}
