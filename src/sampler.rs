//! Samples a 2-D image into a bounded sequence of 4-color frames.
//!
//! Animation sources are tall, narrow images: each row is one moment in time
//! and the four sample columns map onto the four strip positions. The sampler
//! walks down the image, bilinearly interpolating between rows when the image
//! is taller than the firmware's pattern buffer.

use quadled_shared::STRIP_COUNT;

use crate::{frame::Frame, Error, Result};

/// Borrowed, read-only RGBA pixel grid.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
	data:   &'a [u8],
	width:  usize,
	height: usize,
}

impl<'a> PixelBuffer<'a> {
	/// Wrap a decoded RGBA byte slice. `data` must hold exactly
	/// `width * height * 4` bytes and both dimensions must be nonzero.
	pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
		if width == 0 || height == 0 || data.len() != width * height * 4 {
			return Err(Error::PixelBufferSize {
				len: data.len(),
				width,
				height,
			});
		}

		Ok(Self {
			data,
			width,
			height,
		})
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	fn channel(&self, x: usize, y: usize, c: usize) -> f64 {
		f64::from(self.data[(y * self.width + x) * 4 + c])
	}

	/// Bilinearly interpolated RGBA at a real-valued coordinate.
	///
	/// Coordinates are clamped to the grid, with the boundary row/column
	/// replicated, so out-of-range queries never read out of bounds and a
	/// 1-pixel-wide or -tall buffer degenerates to direct sampling.
	///
	/// The R, G and B channels interpolate squared intensities, horizontally
	/// then vertically, with a single square root at the end; an
	/// approximation of linear-light blending that the firmware-visible
	/// output depends on, so it must not be swapped for plain bilinear.
	/// Alpha interpolates linearly. Exact integer coordinates return the
	/// source pixel unchanged (`sqrt(v^2) == v`).
	pub fn sample_bilinear(&self, x: f64, y: f64) -> [f64; 4] {
		let clamp = |v: f64, max: usize| v.clamp(0.0, (max - 1) as f64);

		let fx = clamp(x, self.width);
		let fy = clamp(y, self.height);

		let ix1 = fx.floor() as usize;
		let iy1 = fy.floor() as usize;
		let ix2 = (ix1 + 1).min(self.width - 1);
		let iy2 = (iy1 + 1).min(self.height - 1);

		let xpos = fx - ix1 as f64;
		let ypos = fy - iy1 as f64;

		let lerp = |a: f64, b: f64, t: f64| (b - a) * t + a;

		let mut result = [0.0; 4];

		for (c, out) in result.iter_mut().enumerate().take(3) {
			let sq = |x, y| {
				let v = self.channel(x, y, c);
				v * v
			};

			let top = lerp(sq(ix1, iy1), sq(ix2, iy1), xpos);
			let bottom = lerp(sq(ix1, iy2), sq(ix2, iy2), xpos);

			*out = lerp(top, bottom, ypos).sqrt();
		}

		let top = lerp(self.channel(ix1, iy1, 3), self.channel(ix2, iy1, 3), xpos);
		let bottom = lerp(self.channel(ix1, iy2, 3), self.channel(ix2, iy2, 3), xpos);
		result[3] = lerp(top, bottom, ypos);

		result
	}
}

/// Multiplicative per-channel correction applied before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCorrection {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl ColorCorrection {
	pub const fn new(r: f64, g: f64, b: f64) -> Self {
		Self { r, g, b }
	}

	/// Identity correction.
	pub const IDENTITY: Self = Self::new(1.0, 1.0, 1.0);
}

impl Default for ColorCorrection {
	fn default() -> Self {
		Self::IDENTITY
	}
}

/// Sample an image into at most `max_frames` frames, top to bottom.
///
/// Yields `min(height, max_frames)` frames. When the image is no taller than
/// the limit, frame `i` is row `i` exactly; otherwise rows are resampled at
/// real-valued positions `i * height / frame_count`. Each frame reads the
/// four columns `x = 0..4`.
pub fn sample_pattern<'a>(
	pixels: &'a PixelBuffer<'a>,
	correction: ColorCorrection,
	max_frames: usize,
) -> PatternFrames<'a> {
	let count = pixels.height().min(max_frames);

	PatternFrames {
		pixels:  *pixels,
		correction,
		step:    pixels.height() as f64 / count as f64,
		index:   0,
		count,
	}
}

/// Lazy frame sequence produced by [`sample_pattern`], consumed exactly once.
pub struct PatternFrames<'a> {
	pixels:     PixelBuffer<'a>,
	correction: ColorCorrection,
	step:       f64,
	index:      usize,
	count:      usize,
}

impl Iterator for PatternFrames<'_> {
	type Item = Frame;

	fn next(&mut self) -> Option<Frame> {
		if self.index >= self.count {
			return None;
		}

		let y = self.index as f64 * self.step;
		self.index += 1;

		let mut channels = [[0.0; 3]; STRIP_COUNT];
		for (x, strip) in channels.iter_mut().enumerate() {
			let [r, g, b, _a] = self.pixels.sample_bilinear(x as f64, y);

			*strip = [
				r * self.correction.r,
				g * self.correction.g,
				b * self.correction.b,
			];
		}

		Some(Frame::from_linear(channels))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.count - self.index;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for PatternFrames<'_> {}
