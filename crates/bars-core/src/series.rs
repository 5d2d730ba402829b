// File: crates/bars-core/src/series.rs
// Summary: Fixed-length, lock-guarded sequence of bar values.
// Notes:
// - The lock is held for a single get or set only. Readers may observe a mix of old and
//   new values across indices while a driver is midway through updating a frame.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BarsError;

/// Values backing a bar chart. Conventionally in [0, 1]; not clamped.
#[derive(Debug)]
pub struct BarSeries {
    values: RwLock<Vec<f64>>,
    len: usize,
}

impl BarSeries {
    /// Allocate `n` bars, all at 0.0.
    pub fn new(n: usize) -> Result<Self, BarsError> {
        if n == 0 {
            return Err(BarsError::NoBars);
        }
        Ok(Self { values: RwLock::new(vec![0.0; n]), len: n })
    }

    /// Number of bars, fixed at construction.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.len }

    /// Set bar `i` to `v`.
    ///
    /// # Panics
    /// When `i >= len()`.
    pub fn set_value(&self, i: usize, v: f64) {
        if let Err(e) = self.try_set_value(i, v) {
            panic!("{e}");
        }
    }

    /// Current value of bar `i`.
    ///
    /// # Panics
    /// When `i >= len()`.
    pub fn value(&self, i: usize) -> f64 {
        match self.try_value(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_set_value(&self, i: usize, v: f64) -> Result<(), BarsError> {
        let mut values = self.write();
        let slot = values
            .get_mut(i)
            .ok_or(BarsError::IndexOutOfRange { index: i, len: self.len })?;
        *slot = v;
        Ok(())
    }

    pub fn try_value(&self, i: usize) -> Result<f64, BarsError> {
        self.read()
            .get(i)
            .copied()
            .ok_or(BarsError::IndexOutOfRange { index: i, len: self.len })
    }

    // Plain f64 storage cannot be left half-written, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<f64>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<f64>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}
