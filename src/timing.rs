//! Raster timing source.
//!
//! Produces the pixel coordinate stream and sync pulses that drive the
//! pixel pipeline. Coordinates count through the full raster including
//! blanking and wrap back to (0,0) at the start of each new frame; (0,0)
//! is the first visible pixel and doubles as the frame-boundary event.

use serde::{Deserialize, Serialize};

/// Industry-standard 640x480@60 timing: 800 clocks per line, 525 lines.
pub const VGA_640X480: RasterTiming = RasterTiming {
    h_active: 640,
    h_fp: 16,
    h_sync: 96,
    h_bp: 48, // Htot = 800
    v_active: 480,
    v_fp: 10,
    v_sync: 2,
    v_bp: 33, // Vtot = 525
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterTiming {
    pub h_active: u32,
    pub h_fp: u32,
    pub h_sync: u32,
    pub h_bp: u32, // h_active + h_fp + h_sync + h_bp = Htot

    pub v_active: u32,
    pub v_fp: u32,
    pub v_sync: u32,
    pub v_bp: u32, // v_active + v_fp + v_sync + v_bp = Vtot
}

impl RasterTiming {
    pub fn h_total(&self) -> u32 {
        self.h_active + self.h_fp + self.h_sync + self.h_bp
    }

    pub fn v_total(&self) -> u32 {
        self.v_active + self.v_fp + self.v_sync + self.v_bp
    }

    /// Pixel clocks in one full frame including blanking
    pub fn frame_ticks(&self) -> u64 {
        u64::from(self.h_total()) * u64::from(self.v_total())
    }
}

/// One pixel clock's worth of timing signals.
///
/// This is the whole contract between the timing source and the pixel
/// pipeline: downstream logic sees only these samples, never the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterPixel {
    pub x: u32,
    pub y: u32,
    /// Horizontal sync pulse is asserted this clock
    pub hsync: bool,
    /// Vertical sync pulse is asserted this clock
    pub vsync: bool,
    /// Inside the visible raster rectangle
    pub active: bool,
    /// Coordinate is the raster origin (0,0) - the once-per-frame trigger
    pub frame_start: bool,
}

/// Free-running x/y pixel counter.
///
/// Line order is active -> front porch -> sync -> back porch, so the
/// origin lands on the first visible pixel of the frame.
#[derive(Debug)]
pub struct RasterCounter {
    pub t: RasterTiming,
    x: u32, // 0..Htot-1
    y: u32, // 0..Vtot-1
}

impl RasterCounter {
    pub fn new(t: RasterTiming) -> Self {
        Self { t, x: 0, y: 0 }
    }

    /// Return the beam to the raster origin (synchronous reset)
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Timing signals for the current beam position, without advancing
    pub fn sample(&self) -> RasterPixel {
        let hsync_start = self.t.h_active + self.t.h_fp;
        let hsync = self.x >= hsync_start && self.x < hsync_start + self.t.h_sync;

        let vsync_start = self.t.v_active + self.t.v_fp;
        let vsync = self.y >= vsync_start && self.y < vsync_start + self.t.v_sync;

        RasterPixel {
            x: self.x,
            y: self.y,
            hsync,
            vsync,
            active: self.x < self.t.h_active && self.y < self.t.v_active,
            frame_start: self.x == 0 && self.y == 0,
        }
    }

    /// Sample the current pixel, then advance the beam by one pixel clock
    pub fn tick(&mut self) -> RasterPixel {
        let pixel = self.sample();

        self.x += 1;
        if self.x == self.t.h_total() {
            self.x = 0;
            self.y += 1;
            if self.y == self.t.v_total() {
                self.y = 0;
            }
        }

        pixel
    }
}
