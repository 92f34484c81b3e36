//! Host-side protocol engine for an addressable 4-strip RGB LED controller.
//!
//! The controller speaks a small byte protocol over a serial link or a BLE
//! UART bridge: five single-byte opcodes (`0xFB..=0xFF`) followed by color
//! payloads encoded 12 bytes per frame. Because opcodes and colors share the
//! byte stream, color channels are sanitized below the opcode band before
//! they ever reach the wire.
//!
//! Typical flow: parse or sample colors, build a [`Command`], hand it to a
//! [`Session`] with one or more transports attached.
//!
//! ```no_run
//! use quadled::{Color, Command, SerialTransport, Session};
//!
//! # fn main() -> quadled::Result<()> {
//! let colors = [
//! 	Color::from_hex("#ff0000")?,
//! 	Color::from_hex("#00ff00")?,
//! 	Color::from_hex("#0000ff")?,
//! 	Color::from_hex("#ffffff")?,
//! ];
//!
//! let mut session = Session::new();
//! session.attach(SerialTransport::open("/dev/ttyUSB0").map_err(quadled::Error::Transport)?);
//! session.send(&Command::static_color(colors))?;
//! # Ok(())
//! # }
//! ```
//!
//! Pattern upload samples a tall RGBA image down to at most
//! [`MAX_FRAMES`](quadled_shared::MAX_FRAMES) frames:
//!
//! ```no_run
//! use quadled::{sample_pattern, ColorCorrection, Command, PixelBuffer};
//!
//! # fn main() -> quadled::Result<()> {
//! # let (rgba, width, height) = (vec![0u8; 4 * 4 * 128], 4, 128);
//! let pixels = PixelBuffer::new(&rgba, width, height)?;
//! let frames = sample_pattern(&pixels, ColorCorrection::IDENTITY, quadled_shared::MAX_FRAMES);
//! let command = Command::upload_pattern(frames)?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod command;
pub mod frame;
pub mod sampler;
pub mod transport;

#[cfg(feature = "ble")]
pub mod ble;
#[cfg(feature = "tokio")]
pub mod tokio;

mod error;

pub use color::{sanitize_channel, Color};
pub use command::Command;
pub use error::{Error, Result, TransportError};
pub use frame::Frame;
pub use sampler::{sample_pattern, ColorCorrection, PatternFrames, PixelBuffer};
pub use transport::{Chunked, SendOutcome, SerialTransport, Session, Transport};
