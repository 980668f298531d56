use std::f64::consts::{PI, TAU};

/// Wrap a yaw angle into the half-open range (-π, π].
///
/// Values already in range are returned unchanged. `-π` maps to `π`.
pub fn normalize_yaw(yaw: f64) -> f64 {
    if yaw > -PI && yaw <= PI {
        return yaw;
    }
    if !yaw.is_finite() {
        return yaw;
    }

    // rem_euclid lands in [0, 2π), so PI - r lands in (-π, π]
    let wrapped = PI - (PI - yaw).rem_euclid(TAU);
    if wrapped <= -PI {
        // rem_euclid can round up to exactly 2π
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Yaw pointing the opposite way, normalized.
pub fn opposite_yaw(yaw: f64) -> f64 {
    normalize_yaw(yaw + PI)
}
