//! Ball state registers
//!
//! The only mutable state in the pipeline: the moving shape's center and
//! per-axis heading. One writer (the frame-boundary advance), any number
//! of readers per tick.

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Direction of travel along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Positive,
    Negative,
}

/// Registered state of the bouncing ball.
///
/// Mutated exactly once per frame (or forced to the initial pose while
/// reset is asserted); read-only to the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallState {
    /// Center position, bounded to the active display after settling
    pub center: UVec2,
    pub heading_x: Heading,
    pub heading_y: Heading,
}

impl Default for BallState {
    fn default() -> Self {
        Self::initial_pose()
    }
}

impl BallState {
    /// Reset pose: screen center, both axes heading positive
    pub fn initial_pose() -> Self {
        Self {
            center: UVec2::new(DISPLAY_WIDTH / 2, DISPLAY_HEIGHT / 2),
            heading_x: Heading::Positive,
            heading_y: Heading::Positive,
        }
    }

    /// Advance the ball by one frame.
    ///
    /// Position moves first; the heading is then re-evaluated from the
    /// *updated* position. Keeping that order matters: checking the stale
    /// position shifts every bounce by one frame. Boundary tests are
    /// inclusive, so the center may sit exactly on the margin for one
    /// frame before the direction flips.
    pub fn advance(&mut self) {
        self.center.x = match self.heading_x {
            Heading::Positive => self.center.x + BALL_SPEED_X,
            Heading::Negative => self.center.x.saturating_sub(BALL_SPEED_X),
        };
        self.center.y = match self.heading_y {
            Heading::Positive => self.center.y + BALL_SPEED_Y,
            Heading::Negative => self.center.y.saturating_sub(BALL_SPEED_Y),
        };

        if self.center.x <= BALL_SIZE {
            if self.heading_x != Heading::Positive {
                log::debug!("bounce left at x={}", self.center.x);
            }
            self.heading_x = Heading::Positive;
        } else if self.center.x >= DISPLAY_WIDTH - BALL_SIZE {
            if self.heading_x != Heading::Negative {
                log::debug!("bounce right at x={}", self.center.x);
            }
            self.heading_x = Heading::Negative;
        }

        if self.center.y <= BALL_SIZE {
            if self.heading_y != Heading::Positive {
                log::debug!("bounce top at y={}", self.center.y);
            }
            self.heading_y = Heading::Positive;
        } else if self.center.y >= DISPLAY_HEIGHT - BALL_SIZE {
            if self.heading_y != Heading::Negative {
                log::debug!("bounce bottom at y={}", self.center.y);
            }
            self.heading_y = Heading::Negative;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose_is_screen_center() {
        let state = BallState::initial_pose();
        assert_eq!(state.center, UVec2::new(320, 240));
        assert_eq!(state.heading_x, Heading::Positive);
        assert_eq!(state.heading_y, Heading::Positive);
    }

    #[test]
    fn test_single_advance_moves_by_speed() {
        let mut state = BallState::initial_pose();
        state.advance();
        assert_eq!(state.center, UVec2::new(320 + BALL_SPEED_X, 240 + BALL_SPEED_Y));
    }

    #[test]
    fn test_bounce_rests_on_margin_one_frame() {
        // Two pixels shy of the right margin, heading outward
        let mut state = BallState {
            center: UVec2::new(DISPLAY_WIDTH - BALL_SIZE - BALL_SPEED_X, 240),
            heading_x: Heading::Positive,
            heading_y: Heading::Positive,
        };

        // Lands exactly on the bound; the inclusive test flips the heading
        // but the position holds the boundary for this frame
        state.advance();
        assert_eq!(state.center.x, DISPLAY_WIDTH - BALL_SIZE);
        assert_eq!(state.heading_x, Heading::Negative);

        // Next frame moves back inward
        state.advance();
        assert_eq!(state.center.x, DISPLAY_WIDTH - BALL_SIZE - BALL_SPEED_X);
        assert_eq!(state.heading_x, Heading::Negative);
    }

    #[test]
    fn test_left_edge_flips_positive() {
        let mut state = BallState {
            center: UVec2::new(BALL_SIZE + BALL_SPEED_X, 240),
            heading_x: Heading::Negative,
            heading_y: Heading::Positive,
        };
        state.advance();
        assert_eq!(state.center.x, BALL_SIZE);
        assert_eq!(state.heading_x, Heading::Positive);
    }

    #[test]
    fn test_center_bounded_after_first_bounce() {
        let mut state = BallState::initial_pose();
        let mut bounced = false;
        for _ in 0..10_000 {
            let before = (state.heading_x, state.heading_y);
            state.advance();
            bounced |= (state.heading_x, state.heading_y) != before;
            if bounced {
                assert!(state.center.x >= BALL_SIZE);
                assert!(state.center.x <= DISPLAY_WIDTH - BALL_SIZE);
                assert!(state.center.y >= BALL_SIZE);
                assert!(state.center.y <= DISPLAY_HEIGHT - BALL_SIZE);
            }
        }
        assert!(bounced);
    }

    proptest::proptest! {
        /// From any reachable pose the ball settles into the margin
        /// bounds within two frames and never leaves them again.
        /// Reachable centers share the initial pose's parity: with a
        /// speed of 2 per axis, parity never changes
        #[test]
        fn prop_settles_into_bounds(
            half_cx in BALL_SIZE / 2..=(DISPLAY_WIDTH - BALL_SIZE) / 2,
            half_cy in BALL_SIZE / 2..=(DISPLAY_HEIGHT - BALL_SIZE) / 2,
            flip_x: bool,
            flip_y: bool,
            frames in 3usize..200,
        ) {
            let mut state = BallState {
                center: UVec2::new(half_cx * 2, half_cy * 2),
                heading_x: if flip_x { Heading::Negative } else { Heading::Positive },
                heading_y: if flip_y { Heading::Negative } else { Heading::Positive },
            };

            // An inconsistent (center, heading) pair can overshoot once
            // before the margin check turns it around
            state.advance();
            state.advance();

            for _ in 0..frames {
                state.advance();
                proptest::prop_assert!(state.center.x >= BALL_SIZE);
                proptest::prop_assert!(state.center.x <= DISPLAY_WIDTH - BALL_SIZE);
                proptest::prop_assert!(state.center.y >= BALL_SIZE);
                proptest::prop_assert!(state.center.y <= DISPLAY_HEIGHT - BALL_SIZE);
            }
        }
    }

    #[test]
    fn test_advance_sequence_is_deterministic() {
        let mut a = BallState::initial_pose();
        let mut b = BallState::initial_pose();
        for _ in 0..5_000 {
            a.advance();
            b.advance();
            assert_eq!(a, b);
        }
    }
}
