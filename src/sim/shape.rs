//! Distance-based shape classification
//!
//! Pure per-pixel test: squared Euclidean distance from the pixel to the
//! ball center, compared against the ball and halo radii. No square roots;
//! both sides of the comparison stay squared.

use glam::UVec2;

use crate::consts::{BALL_SIZE, HALO_MARGIN};
use crate::signed_delta;

/// Which ring of the ball a pixel falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRegion {
    /// Inside the ball disc
    Ball,
    /// Inside the halo ring around the ball
    Halo,
    /// Outside both
    None,
}

/// Squared distance between a pixel and the ball center.
///
/// The deltas must be computed signed: both operands are non-negative,
/// but the pixel is left of / above the center half the time, and a plain
/// unsigned subtraction underflows there. An earlier revision of this
/// logic had exactly that bug, misclassifying pixels near the left and
/// top edges of the ball.
#[inline]
pub fn distance_squared(coord: UVec2, center: UVec2) -> i64 {
    let dx = signed_delta(coord.x, center.x);
    let dy = signed_delta(coord.y, center.y);
    dx * dx + dy * dy
}

/// Classify a pixel against the ball at the given center.
pub fn classify(coord: UVec2, center: UVec2) -> ShapeRegion {
    let d2 = distance_squared(coord, center);
    let ball_r2 = i64::from(BALL_SIZE) * i64::from(BALL_SIZE);
    let halo_r = i64::from(BALL_SIZE + HALO_MARGIN);

    if d2 <= ball_r2 {
        ShapeRegion::Ball
    } else if d2 <= halo_r * halo_r {
        ShapeRegion::Halo
    } else {
        ShapeRegion::None
    }
}
