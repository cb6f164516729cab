use super::model::{Reading, Status};

// ---------------------------------------------------------------------------
// Aggregation over classified readings
// ---------------------------------------------------------------------------

/// Per-bucket row counts. `total` counts every row; unclassified rows are in
/// no bucket, so `ok + tolerance + calibration <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub ok: usize,
    pub tolerance: usize,
    pub calibration: usize,
}

impl StatusCounts {
    /// Rows that ended up in one of the three counted buckets.
    pub fn classified(&self) -> usize {
        self.ok + self.tolerance + self.calibration
    }

    /// Rows needing attention (tolerance band or out of calibration).
    pub fn needs_review(&self) -> usize {
        self.tolerance + self.calibration
    }
}

/// Count rows per status bucket.
pub fn count_statuses(readings: &[Reading]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: readings.len(),
        ..StatusCounts::default()
    };
    for r in readings {
        match r.status {
            Status::Ok => counts.ok += 1,
            Status::Tolerance => counts.tolerance += 1,
            Status::Calibration => counts.calibration += 1,
            Status::Unclassified => {}
        }
    }
    counts
}

/// Indices of rows in the needs-review view (status Tolerance or
/// Calibration), preserving original row order.
pub fn review_indices(readings: &[Reading]) -> Vec<usize> {
    readings
        .iter()
        .enumerate()
        .filter(|(_, r)| r.status.needs_review())
        .map(|(i, _)| i)
        .collect()
}
