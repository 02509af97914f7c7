//! Angle and cycle arithmetic shared by the projections.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Inclusive 1-based count from `from` to `to` on a cycle of `n` positions.
///
/// Both inputs are 1-based. `inclusive_distance(3, 3, 12)` = 1 (same
/// position), `inclusive_distance(12, 1, 12)` = 2. Returns 0 when `n` is 0.
pub fn inclusive_distance(from: u8, to: u8, n: u8) -> u8 {
    if n == 0 {
        return 0;
    }
    let n = n as i16;
    ((to as i16 - from as i16).rem_euclid(n) + 1) as u8
}
