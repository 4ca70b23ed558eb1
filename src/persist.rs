use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::curve::LevelCurve;
use crate::engine::level::UserProgress;
use crate::error::{EngineError, PersistError};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    step: u64,
    // Points only; levels are re-derived on load.
    points: BTreeMap<u64, u64>,
}

/// In-memory user progress keyed by user id.
///
/// Every update runs its read-modify-write under one lock, so concurrent
/// awards for the same user are never lost.
#[derive(Debug, Default)]
pub struct ProgressStore {
    curve: LevelCurve,
    points: Mutex<BTreeMap<u64, u64>>,
}

impl ProgressStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_curve(curve: LevelCurve) -> Self {
        Self {
            curve,
            points: Mutex::new(BTreeMap::new()),
        }
    }

    #[inline]
    pub fn curve(&self) -> LevelCurve {
        self.curve
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<u64, u64>> {
        // Values are plain integers; a poisoned lock still holds a consistent map.
        self.points.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Progress for `user_id`; unknown users start at zero points.
    pub fn get(&self, user_id: u64) -> UserProgress {
        let points = self.lock().get(&user_id).copied().unwrap_or(0);
        self.curve.progress(points)
    }

    /// Award points. Returns the new progress and the number of levels gained.
    pub fn award(&self, user_id: u64, delta: i64) -> Result<(UserProgress, u32), EngineError> {
        let mut map = self.lock();
        let mut progress = self.curve.progress(map.get(&user_id).copied().unwrap_or(0));
        let gained = self.curve.add_points(&mut progress, delta)?;
        map.insert(user_id, progress.points());
        debug!(user_id, points = progress.points(), "awarded points");
        Ok((progress, gained))
    }

    /// Deduct points (floored at zero). Returns the new progress and levels lost.
    pub fn deduct(&self, user_id: u64, delta: i64) -> Result<(UserProgress, u32), EngineError> {
        let mut map = self.lock();
        let mut progress = self.curve.progress(map.get(&user_id).copied().unwrap_or(0));
        let lost = self.curve.deduct_points(&mut progress, delta)?;
        map.insert(user_id, progress.points());
        debug!(user_id, points = progress.points(), "deducted points");
        Ok((progress, lost))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Save the store to a file as a single bincode blob.
pub fn save_snapshot<P: AsRef<Path>>(path: P, store: &ProgressStore) -> Result<(), PersistError> {
    let snap = Snapshot {
        version: FORMAT_VERSION,
        step: store.curve.step(),
        points: store.lock().clone(),
    };
    let bytes = bincode::serialize(&snap)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Load a store written by [`save_snapshot`].
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<ProgressStore, PersistError> {
    let bytes = fs::read(path.as_ref())?;
    let snap: Snapshot = bincode::deserialize(&bytes)?;
    if snap.version != FORMAT_VERSION {
        warn!(found = snap.version, "rejecting progress snapshot");
        return Err(PersistError::Version {
            found: snap.version,
            expected: FORMAT_VERSION,
        });
    }
    let curve = LevelCurve::new(snap.step).map_err(|_| PersistError::Step(snap.step))?;
    Ok(ProgressStore {
        curve,
        points: Mutex::new(snap.points),
    })
}
