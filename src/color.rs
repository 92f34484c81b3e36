use quadled_shared::{MAX_CHANNEL_VALUE, RESERVED_BAND_START};

use crate::{Error, Result};

/// Keep a channel value out of the reserved opcode band.
///
/// The wire carries opcodes and color bytes in the same stream, so any channel
/// value in `0xFB..=0xFF` would desync the receiver's command framing. Values
/// in the band collapse to `0xFA`; everything below passes through.
pub fn sanitize_channel(v: u8) -> u8 {
	if v >= RESERVED_BAND_START {
		MAX_CHANNEL_VALUE
	} else {
		v
	}
}

/// One strip color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Copy with every channel sanitized out of the reserved band.
	pub fn sanitized(self) -> Self {
		Self {
			r: sanitize_channel(self.r),
			g: sanitize_channel(self.g),
			b: sanitize_channel(self.b),
		}
	}

	/// Quantize real-valued channels back to 8 bits.
	///
	/// Values are clamped to `[0, 255]` and rounded to the nearest integer.
	/// Sanitization is left to the encode path.
	pub fn from_linear(r: f64, g: f64, b: f64) -> Self {
		let quantize = |v: f64| v.clamp(0.0, 255.0).round() as u8;

		Self {
			r: quantize(r),
			g: quantize(g),
			b: quantize(b),
		}
	}

	/// Parse a `#rrggbb` triplet, case-insensitive, leading `#` optional.
	pub fn from_hex(s: &str) -> Result<Self> {
		let hex = s.strip_prefix('#').unwrap_or(s);

		if hex.len() != 6 || !hex.is_ascii() {
			return Err(Error::InvalidColor(s.to_string()));
		}

		let channel = |range| {
			u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
		};

		Ok(Self {
			r: channel(0..2)?,
			g: channel(2..4)?,
			b: channel(4..6)?,
		})
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self { r, g, b }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_parsing() {
		assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::new(0xFF, 0x80, 0x00));
		assert_eq!(Color::from_hex("AbCdEf").unwrap(), Color::new(0xAB, 0xCD, 0xEF));
		assert_eq!(Color::from_hex("#000000").unwrap(), Color::default());

		assert!(Color::from_hex("").is_err());
		assert!(Color::from_hex("#fff").is_err());
		assert!(Color::from_hex("zzzzzz").is_err());
		assert!(Color::from_hex("#ff80001").is_err());
		assert!(Color::from_hex("ff80ü0").is_err());
	}

	#[test]
	fn quantization() {
		assert_eq!(Color::from_linear(-3.0, 0.4, 0.6), Color::new(0, 0, 1));
		assert_eq!(Color::from_linear(254.5, 255.0, 300.0), Color::new(255, 255, 255));
	}
}
