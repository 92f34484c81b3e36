use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// Color input that is not a 6-digit hex triplet.
	#[error("invalid hex color {0:?}")]
	InvalidColor(String),

	/// A pattern upload was asked to carry more frames than the firmware can store.
	#[error("pattern of {requested} frames exceeds the maximum of {max}")]
	TooManyFrames { requested: usize, max: usize },

	/// The pixel data slice does not match the declared dimensions.
	#[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
	PixelBufferSize {
		len:    usize,
		width:  usize,
		height: usize,
	},

	#[error("transport send failed")]
	Transport(#[from] TransportError),
}

/// Failure of a single transport write.
///
/// Timeouts are reported separately from refused writes so callers can tell a
/// stalled link from a dead one.
#[derive(Debug, Error)]
pub enum TransportError {
	#[error("write timed out")]
	Timeout,

	#[error(transparent)]
	Io(io::Error),

	#[error(transparent)]
	Serial(#[from] serialport::Error),

	#[cfg(feature = "ble")]
	#[error(transparent)]
	Ble(#[from] btleplug::Error),
}

impl From<io::Error> for TransportError {
	fn from(e: io::Error) -> Self {
		if e.kind() == io::ErrorKind::TimedOut {
			TransportError::Timeout
		} else {
			TransportError::Io(e)
		}
	}
}
