//! VGA Bounce entry point
//!
//! Steps the signal generator through a number of frames, writes the last
//! frame as a PPM image and prints the final ball state as JSON so two
//! runs can be diffed for determinism.

use std::fs::File;
use std::io::{self, BufWriter};

use vga_bounce::capture::capture_frame;
use vga_bounce::sim::SignalGenerator;
use vga_bounce::timing::VGA_640X480;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(120);
    let out_path = args.next().unwrap_or_else(|| "frame.ppm".to_string());

    log::info!("VGA Bounce: {frames} frames, dumping last frame to {out_path}");

    let mut generator = SignalGenerator::new(VGA_640X480);

    // Hold reset for one tick to establish the initial pose
    generator.tick(false);

    // Run all but the final frame at full rate
    let frame_ticks = generator.timing().frame_ticks();
    for _ in 0..frames.saturating_sub(1) * frame_ticks {
        generator.tick(true);
    }

    let frame = capture_frame(&mut generator);
    let mut sink = BufWriter::new(File::create(&out_path)?);
    frame.write_ppm(&mut sink)?;
    log::info!(
        "wrote {}x{} frame to {out_path}",
        frame.width(),
        frame.height()
    );

    let snapshot = serde_json::to_string_pretty(generator.ball())?;
    println!("{snapshot}");

    Ok(())
}
