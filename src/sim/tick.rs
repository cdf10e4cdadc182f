//! Per-tick pixel pipeline
//!
//! One pixel clock per call. The output word is a pure function of the
//! current raster sample and the current ball registers; the registered
//! state update happens after the output is formed, so an advance at the
//! frame boundary becomes visible from the following pixel on.

use glam::UVec2;

use super::compose::{compose, pack_output};
use super::glyph::glyph_lit;
use super::shape::classify;
use super::state::BallState;
use crate::timing::{RasterCounter, RasterPixel, RasterTiming};

/// Combinational half of the pipeline: raster sample + ball registers in,
/// packed output word out. No state is touched.
pub fn pixel_output(state: &BallState, pixel: RasterPixel) -> u8 {
    let coord = UVec2::new(pixel.x, pixel.y);
    let region = classify(coord, state.center);
    let color = compose(pixel.active, region, glyph_lit(coord));
    pack_output(pixel.hsync, pixel.vsync, color)
}

/// One pixel clock: form the output word from the current registers, then
/// apply the synchronous update. Reset overrides the frame-boundary
/// advance on the tick it is asserted (`reset_n` is active-low).
pub fn tick(state: &mut BallState, pixel: RasterPixel, reset_n: bool) -> u8 {
    let word = pixel_output(state, pixel);

    if !reset_n {
        *state = BallState::initial_pose();
    } else if pixel.frame_start {
        state.advance();
    }

    word
}

/// The assembled signal generator: raster counter driving the pipeline.
#[derive(Debug)]
pub struct SignalGenerator {
    raster: RasterCounter,
    ball: BallState,
}

impl SignalGenerator {
    pub fn new(timing: RasterTiming) -> Self {
        Self {
            raster: RasterCounter::new(timing),
            ball: BallState::initial_pose(),
        }
    }

    /// Current ball registers (read-only)
    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    /// Timing the raster counter was built with
    pub fn timing(&self) -> RasterTiming {
        self.raster.t
    }

    /// Raster sample the next `tick` call will render
    pub fn peek(&self) -> RasterPixel {
        self.raster.sample()
    }

    /// Advance the whole generator by one pixel clock.
    ///
    /// While reset is asserted the beam and the ball are both held at
    /// their origin state.
    pub fn tick(&mut self, reset_n: bool) -> u8 {
        let pixel = self.raster.tick();
        let word = tick(&mut self.ball, pixel, reset_n);
        if !reset_n {
            self.raster.reset();
        }
        word
    }
}
