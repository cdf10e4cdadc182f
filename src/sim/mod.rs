//! Deterministic pixel pipeline
//!
//! Everything that decides a pixel's color lives here. This module must be
//! pure and deterministic:
//! - One state update per frame, at the frame boundary only
//! - Pure per-pixel functions everywhere else
//! - No platform or io dependencies; the only input is the raster sample

pub mod compose;
pub mod glyph;
pub mod shape;
pub mod state;
pub mod tick;

pub use compose::{
    BACKGROUND_COLOR, BALL_COLOR, BLACK, GLYPH_COLOR, HALO_COLOR, Rgb222, compose, pack_output,
};
pub use glyph::{glyph_lit, glyph_membership};
pub use shape::{ShapeRegion, classify, distance_squared};
pub use state::{BallState, Heading};
pub use tick::{SignalGenerator, pixel_output, tick};
