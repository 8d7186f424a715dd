use serde::{Deserialize, Serialize};

/// Handle boundary offsets along the slider track, in container pixels.
///
/// A table for `count` bars holds `count + 1` boundaries. Index `i` is the
/// position of a handle sitting before bar `i`; index `count` is the handle
/// after the last bar. The table is always rebuilt as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    positions: Vec<f64>,
    stride: f64,
}

impl PositionTable {
    /// Lays out `count + 1` evenly spaced boundaries.
    ///
    /// `4 * handle_radius` of the width is reserved so neither handle clips
    /// the container. The first boundary is pinned to `0` and the last one
    /// is pushed out by `handle_radius`, which puts both extreme handles
    /// flush with the container edges.
    ///
    /// Returns an empty table when `count == 0` or when the inputs are not
    /// finite; callers hide the slider in that case.
    #[must_use]
    pub fn compute(track_width: f64, count: usize, handle_radius: f64) -> Self {
        if count == 0 || !track_width.is_finite() || !handle_radius.is_finite() {
            return Self::default();
        }

        let radius = handle_radius.max(0.0);
        let effective_width = (track_width - radius * 4.0).max(0.0);
        let stride = effective_width / count as f64;

        let mut positions: Vec<f64> = (0..=count)
            .map(|i| radius + stride * i as f64)
            .collect();
        positions[0] = 0.0;
        positions[count] += radius;

        Self { positions, stride }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Highest valid boundary index, i.e. the bar count.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.positions.len().checked_sub(1)
    }

    /// Width of one bar slot.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.stride
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.positions.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.positions.last().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.positions
    }
}
