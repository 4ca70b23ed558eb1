use serde::{Deserialize, Serialize};
use tracing::info;

use crate::curve::LevelCurve;
use crate::error::EngineError;

/// Points and the level derived from them.
///
/// Fields are private so the level can only change through a points update.
/// Deserialisation reads `points` and re-derives the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredProgress")]
pub struct UserProgress {
    points: u64,
    level: u32,
}

#[derive(Deserialize)]
struct StoredProgress {
    points: u64,
}

impl From<StoredProgress> for UserProgress {
    fn from(s: StoredProgress) -> Self {
        UserProgress::from_points(s.points)
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl UserProgress {
    #[inline]
    pub const fn new() -> Self {
        Self { points: 0, level: 1 }
    }

    #[inline]
    pub fn from_points(points: u64) -> Self {
        LevelCurve::default().progress(points)
    }

    #[inline]
    pub const fn points(&self) -> u64 {
        self.points
    }

    #[inline]
    pub const fn level(&self) -> u32 {
        self.level
    }
}

/// Read-only summary returned to the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub completed_challenges: u64,
    pub earned_badges: u64,
    pub total_likes: u64,
    pub points: u64,
    pub level: u32,
    /// Width of the current level band in points.
    pub next_level_points: u64,
    /// 0..=100
    pub progress_to_next_level: u8,
}

impl LevelCurve {
    #[inline]
    pub fn progress(&self, points: u64) -> UserProgress {
        UserProgress {
            points,
            level: self.level_for(points),
        }
    }

    /// Stats for a (points, level) pair plus externally gathered counts.
    ///
    /// `level` is taken as given; when it disagrees with `points` the
    /// percentage is still clamped to 0..=100.
    pub fn compute_stats(
        &self,
        points: u64,
        level: u32,
        design_count: u64,
        badge_count: u64,
        total_likes: u64,
    ) -> Result<UserStats, EngineError> {
        if level == 0 {
            return Err(EngineError::InvalidArgument("level must be >= 1".into()));
        }
        let current = self.threshold(level);
        let next = self.threshold(level.saturating_add(1));
        let needed = next.saturating_sub(current);

        let pct: i128 = if needed == 0 {
            100
        } else {
            let into_level = i128::from(points) - i128::from(current);
            (into_level * 100).div_euclid(i128::from(needed))
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let progress_to_next_level = pct.clamp(0, 100) as u8;

        Ok(UserStats {
            completed_challenges: design_count,
            earned_badges: badge_count,
            total_likes,
            points,
            level,
            next_level_points: needed,
            progress_to_next_level,
        })
    }

    /// Award `delta` points and re-derive the level. Returns levels gained.
    pub fn add_points(&self, progress: &mut UserProgress, delta: i64) -> Result<u32, EngineError> {
        let delta = positive_delta(delta)?;
        let points = progress.points.checked_add(delta).ok_or_else(|| {
            EngineError::InvalidArgument(format!("awarding {delta} points overflows"))
        })?;
        let before = progress.level;
        *progress = self.progress(points);
        let gained = progress.level - before;
        if gained > 0 {
            info!(level = progress.level, points, "level up");
        }
        Ok(gained)
    }

    /// Remove up to `delta` points (floored at zero) and re-derive the level.
    /// Returns levels lost.
    pub fn deduct_points(&self, progress: &mut UserProgress, delta: i64) -> Result<u32, EngineError> {
        let delta = positive_delta(delta)?;
        let before = progress.level;
        *progress = self.progress(progress.points.saturating_sub(delta));
        let lost = before - progress.level;
        if lost > 0 {
            info!(level = progress.level, points = progress.points, "level down");
        }
        Ok(lost)
    }
}

fn positive_delta(delta: i64) -> Result<u64, EngineError> {
    u64::try_from(delta)
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| EngineError::InvalidArgument(format!("points delta must be > 0, got {delta}")))
}

/// `1 + floor(sqrt(points / 25))`
#[inline]
pub fn level(points: u64) -> u32 {
    LevelCurve::default().level_for(points)
}

/// `25 * (level - 1)^2`
#[inline]
pub fn threshold(level: u32) -> u64 {
    LevelCurve::default().threshold(level)
}

#[inline]
pub fn compute_stats(
    points: u64,
    level: u32,
    design_count: u64,
    badge_count: u64,
    total_likes: u64,
) -> Result<UserStats, EngineError> {
    LevelCurve::default().compute_stats(points, level, design_count, badge_count, total_likes)
}

#[inline]
pub fn add_points(progress: &mut UserProgress, delta: i64) -> Result<u32, EngineError> {
    LevelCurve::default().add_points(progress, delta)
}

#[inline]
pub fn deduct_points(progress: &mut UserProgress, delta: i64) -> Result<u32, EngineError> {
    LevelCurve::default().deduct_points(progress, delta)
}
