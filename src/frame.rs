use quadled_shared::{CHANNEL_ORDER, FRAME_SIZE, STRIP_COUNT};

use crate::color::{sanitize_channel, Color};

/// Colors for all four strip positions at one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
	colors: [Color; STRIP_COUNT],
}

impl Frame {
	pub const fn new(colors: [Color; STRIP_COUNT]) -> Self {
		Self { colors }
	}

	/// Build a frame from real-valued per-strip channels, quantizing each.
	pub fn from_linear(channels: [[f64; 3]; STRIP_COUNT]) -> Self {
		Self {
			colors: channels.map(|[r, g, b]| Color::from_linear(r, g, b)),
		}
	}

	pub fn colors(&self) -> &[Color; STRIP_COUNT] {
		&self.colors
	}

	/// Encode into the fixed 12-byte wire layout.
	///
	/// The channel order differs per strip position (see
	/// [`quadled_shared::CHANNEL_ORDER`]). Every byte is sanitized here even if
	/// the caller already did so; a reserved byte leaking through would cost
	/// the receiver its entire command framing.
	pub fn encode(&self) -> [u8; FRAME_SIZE] {
		let mut out = [0u8; FRAME_SIZE];

		for (position, color) in self.colors.iter().enumerate() {
			let channels = [color.r, color.g, color.b];

			for (slot, &channel) in CHANNEL_ORDER[position].iter().enumerate() {
				out[position * 3 + slot] = sanitize_channel(channels[channel]);
			}
		}

		out
	}
}

impl From<[Color; STRIP_COUNT]> for Frame {
	fn from(colors: [Color; STRIP_COUNT]) -> Self {
		Self::new(colors)
	}
}
