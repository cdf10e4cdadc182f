//! Frame capture
//!
//! Turns the packed output word stream back into an image so a frame can
//! be inspected or dumped to disk. This is the consumer side of the wire
//! format: `unpack_output` is the exact inverse of the packing.

use std::io::{self, Write};

use bytemuck::{Pod, Zeroable};

use crate::sim::{Rgb222, SignalGenerator};

/// Decode an output word into (hsync, vsync, color).
///
/// Inverse of `sim::pack_output`; channel bit 0 sits in the high nibble,
/// bit 1 in the low nibble.
pub fn unpack_output(word: u8) -> (bool, bool, Rgb222) {
    let hsync = word & 0x80 != 0;
    let vsync = word & 0x08 != 0;
    let r = ((word >> 4) & 0x1) | ((word & 0x1) << 1);
    let g = ((word >> 5) & 0x1) | (((word >> 1) & 0x1) << 1);
    let b = ((word >> 6) & 0x1) | (((word >> 2) & 0x1) << 1);
    (hsync, vsync, Rgb222::new(r, g, b))
}

/// One captured pixel, 8 bits per channel. Pod so a whole frame can be
/// handed to an io sink as raw bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct PixelRgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb222> for PixelRgb8 {
    fn from(c: Rgb222) -> Self {
        // 0..=3 -> 0..=255, evenly spaced
        Self {
            r: c.r * 85,
            g: c.g * 85,
            b: c.b * 85,
        }
    }
}

/// A captured active-region frame
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<PixelRgb8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![PixelRgb8::zeroed(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb222) {
        let index = (y * self.width + x) as usize;
        self.pixels[index] = color.into();
    }

    pub fn get(&self, x: u32, y: u32) -> PixelRgb8 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Write the frame as binary PPM (P6)
    pub fn write_ppm<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "P6\n{} {}\n255\n", self.width, self.height)?;
        sink.write_all(bytemuck::cast_slice(&self.pixels))?;
        Ok(())
    }
}

/// Run the generator through one full frame and capture the active region.
///
/// Aligns to the next frame boundary first, then decodes every active
/// pixel of that frame.
pub fn capture_frame(generator: &mut SignalGenerator) -> Framebuffer {
    let timing = generator.timing();
    let mut frame = Framebuffer::new(timing.h_active, timing.v_active);

    let mut aligned = 0u64;
    while !generator.peek().frame_start {
        generator.tick(true);
        aligned += 1;
    }
    if aligned > 0 {
        log::debug!("skipped {aligned} ticks to the frame boundary");
    }

    for _ in 0..timing.frame_ticks() {
        let pixel = generator.peek();
        let word = generator.tick(true);
        if pixel.active {
            let (_, _, color) = unpack_output(word);
            frame.set(pixel.x, pixel.y, color);
        }
    }

    frame
}
