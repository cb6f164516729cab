use super::model::{Reading, Status};

// ---------------------------------------------------------------------------
// Classification rule
// ---------------------------------------------------------------------------

/// Expected exact weight for a 35 kg-capacity scale.
pub const REFERENCE_WEIGHT_35KG: f64 = 20000.0;
/// Expected exact weight for a 15 kg-capacity scale.
pub const REFERENCE_WEIGHT_15KG: f64 = 10000.0;

pub const MAX_CAPACITY_35KG: f64 = 35000.0;
pub const MAX_CAPACITY_15KG: f64 = 15000.0;

/// Deviation band (inclusive) that still counts as within tolerance, in grams.
pub const TOLERANCE_MIN_G: f64 = 1.0;
pub const TOLERANCE_MAX_G: f64 = 5.0;

/// Classify a single reading.
///
/// The reference weight is a fixed literal per capacity class, not derived
/// from the capacity value itself (observed behavior of the export tooling;
/// kept as-is). Precedence, later wins:
/// default `Unclassified` → `Calibration` (diff > 5) → `Tolerance`
/// (1 ≤ diff ≤ 5) → `Ok` (exact match).
pub fn classify(weight: f64, max_capacity: f64) -> Status {
    let reference = if max_capacity == MAX_CAPACITY_35KG {
        REFERENCE_WEIGHT_35KG
    } else if max_capacity == MAX_CAPACITY_15KG {
        REFERENCE_WEIGHT_15KG
    } else {
        return Status::Unclassified;
    };

    let diff = (weight - reference).abs();
    if weight == reference {
        Status::Ok
    } else if (TOLERANCE_MIN_G..=TOLERANCE_MAX_G).contains(&diff) {
        Status::Tolerance
    } else if diff > TOLERANCE_MAX_G {
        Status::Calibration
    } else {
        // 0 < diff < 1: no branch matches; cannot occur with integer grams.
        Status::Unclassified
    }
}

/// Annotate every row in place with its derived status.
pub fn annotate(readings: &mut [Reading]) {
    for r in readings.iter_mut() {
        r.status = classify(r.weight, r.max_capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_reference_is_ok() {
        assert_eq!(classify(20000.0, 35000.0), Status::Ok);
        assert_eq!(classify(10000.0, 15000.0), Status::Ok);
    }

    #[test]
    fn deviation_above_five_grams_needs_calibration() {
        assert_eq!(classify(20006.0, 35000.0), Status::Calibration);
        assert_eq!(classify(10010.0, 15000.0), Status::Calibration);
        assert_eq!(classify(19990.0, 35000.0), Status::Calibration);
    }

    #[test]
    fn tolerance_bounds_are_inclusive() {
        assert_eq!(classify(20005.0, 35000.0), Status::Tolerance);
        assert_eq!(classify(20001.0, 35000.0), Status::Tolerance);
        assert_eq!(classify(19995.0, 35000.0), Status::Tolerance);
        assert_eq!(classify(10003.0, 15000.0), Status::Tolerance);
    }

    #[test]
    fn unrecognized_capacity_stays_unclassified() {
        assert_eq!(classify(20000.0, 50000.0), Status::Unclassified);
        assert_eq!(classify(10000.0, 0.0), Status::Unclassified);
    }

    #[test]
    fn reference_is_per_capacity_class() {
        // 10000 g on a 35 kg scale is 10 kg off its own reference.
        assert_eq!(classify(10000.0, 35000.0), Status::Calibration);
        assert_eq!(classify(20000.0, 15000.0), Status::Calibration);
    }

    #[test]
    fn sub_gram_deviation_matches_no_branch() {
        assert_eq!(classify(20000.5, 35000.0), Status::Unclassified);
    }

    #[test]
    fn annotate_sets_status_in_place() {
        use crate::data::model::Reading;

        let mut rows = vec![
            Reading {
                scale_id: "1".into(),
                sector: None,
                weight: 20000.0,
                max_capacity: 35000.0,
                status: Status::Unclassified,
            },
            Reading {
                scale_id: "2".into(),
                sector: None,
                weight: 10004.0,
                max_capacity: 15000.0,
                status: Status::Unclassified,
            },
        ];
        annotate(&mut rows);
        assert_eq!(rows[0].status, Status::Ok);
        assert_eq!(rows[1].status, Status::Tolerance);
    }
}
