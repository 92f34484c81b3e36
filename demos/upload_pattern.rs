//! Upload a procedurally generated rainbow pattern and start playback.
//!
//! Usage: `upload_pattern <serial-device> [speed]`

use eyre::{bail, Context, Result};
use quadled::{
	sample_pattern,
	tokio::{Chunked, SerialTransport, Session},
	ColorCorrection,
	Command,
	PixelBuffer,
};
use quadled_shared::MAX_FRAMES;

/// A 4-wide column gradient cycling through hues, one row per animation step.
fn rainbow_rgba(width: usize, height: usize) -> Vec<u8> {
	let mut data = Vec::with_capacity(width * height * 4);

	for y in 0..height {
		for x in 0..width {
			let phase = (y * 3 + x * 40) % 765;
			let (r, g, b) = match phase {
				0..=254 => (254 - phase, phase, 0),
				255..=509 => (0, 509 - phase, phase - 255),
				_ => (phase - 510, 0, 764 - phase),
			};

			data.extend_from_slice(&[r as u8, g as u8, b as u8, 255]);
		}
	}

	data
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let mut args = std::env::args().skip(1);
	let Some(device) = args.next() else {
		bail!("usage: upload_pattern <serial-device> [speed]");
	};
	let speed: u8 = args.next().as_deref().unwrap_or("5").parse()?;

	let rgba = rainbow_rgba(4, 120);
	let pixels = PixelBuffer::new(&rgba, 4, 120)?;
	let frames = sample_pattern(&pixels, ColorCorrection::IDENTITY, MAX_FRAMES);

	let mut session = Session::new();
	session.attach(Chunked::new(
		SerialTransport::open(&device).wrap_err("opening serial device")?,
	));

	session.send(&Command::upload_pattern(frames)?).await?;
	session.send(&Command::set_speed(speed)).await?;
	session.send(&Command::start_playback()).await?;

	Ok(())
}
