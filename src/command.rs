use quadled_shared::{
	FRAME_SIZE,
	MAX_FRAMES,
	SET_SPEED_COMMAND,
	START_PLAYBACK_COMMAND,
	STATIC_COLOR_COMMAND,
	STOP_PLAYBACK_COMMAND,
	STRIP_COUNT,
	UPLOAD_PATTERN_COMMAND,
};

use crate::{color::Color, frame::Frame, Error, Result};

/// A complete command buffer ready for the wire.
///
/// Commands are self-contained state-setting messages: building one never
/// touches a transport, and resending one is always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	bytes: Vec<u8>,
}

impl Command {
	/// `0xFF` + one encoded frame. Stops playback on the controller.
	pub fn static_color(colors: [Color; STRIP_COUNT]) -> Self {
		let mut bytes = Vec::with_capacity(1 + FRAME_SIZE);
		bytes.push(STATIC_COLOR_COMMAND);
		bytes.extend_from_slice(&Frame::new(colors).encode());

		Self { bytes }
	}

	/// `0xFE` + frame count + the encoded frames, consumed in order.
	///
	/// The frame sequence is consumed exactly once; fails with
	/// [`Error::TooManyFrames`] as soon as a frame beyond the firmware's
	/// buffer capacity is produced. Nothing is truncated.
	pub fn upload_pattern(frames: impl IntoIterator<Item = Frame>) -> Result<Self> {
		let mut bytes = vec![UPLOAD_PATTERN_COMMAND, 0];
		let mut count = 0usize;

		for frame in frames {
			count += 1;
			if count > MAX_FRAMES {
				return Err(Error::TooManyFrames {
					requested: count,
					max:       MAX_FRAMES,
				});
			}

			bytes.extend_from_slice(&frame.encode());
		}

		bytes[1] = count as u8;

		Ok(Self { bytes })
	}

	/// `0xFD` + one speed byte (1 = slowest, 10 = fastest).
	///
	/// The value is passed through unchecked; the firmware clamps it to its
	/// supported range and treats it as a magnitude, never as an opcode.
	pub fn set_speed(speed: u8) -> Self {
		Self {
			bytes: vec![SET_SPEED_COMMAND, speed],
		}
	}

	/// `0xFC`, restart playback of the stored pattern.
	pub fn start_playback() -> Self {
		Self {
			bytes: vec![START_PLAYBACK_COMMAND],
		}
	}

	/// `0xFB`, stop playback.
	pub fn stop_playback() -> Self {
		Self {
			bytes: vec![STOP_PLAYBACK_COMMAND],
		}
	}

	pub fn opcode(&self) -> u8 {
		self.bytes[0]
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

impl AsRef<[u8]> for Command {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}
