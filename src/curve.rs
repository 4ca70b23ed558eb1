use crate::error::EngineError;

/// Points-to-level curve: `level = 1 + floor(sqrt(points / step))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelCurve {
    step: u64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self { step: Self::DEFAULT_STEP }
    }
}

impl LevelCurve {
    pub const DEFAULT_STEP: u64 = 25;

    #[inline]
    pub fn new(step: u64) -> Result<Self, EngineError> {
        if step == 0 {
            return Err(EngineError::InvalidArgument(
                "level curve step must be positive".into(),
            ));
        }
        Ok(Self { step })
    }

    #[inline]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Level reached with `points`. Always >= 1.
    #[inline]
    pub fn level_for(&self, points: u64) -> u32 {
        let root = isqrt(points / self.step);
        u32::try_from(root.saturating_add(1)).unwrap_or(u32::MAX)
    }

    /// Minimum points at which `level_for` returns `level`.
    /// Level 0 is treated as level 1.
    #[inline]
    pub fn threshold(&self, level: u32) -> u64 {
        let n = u64::from(level.saturating_sub(1));
        self.step.saturating_mul(n.saturating_mul(n))
    }
}

/// Integer square root (floor). Float estimate corrected in both directions.
fn isqrt(n: u64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

