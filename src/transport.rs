use std::{io::Write, thread, time::Duration};

use quadled_shared::{BAUD_RATE, DEFAULT_CHUNK_SIZE, INTER_CHUNK_DELAY_MS};
use serialport::SerialPort;
use tracing::{debug, warn};

use crate::{command::Command, Error, Result, TransportError};

/// "Send these bytes reliably" over some already-open link.
///
/// Implementations report failure instead of panicking; the protocol layer
/// never opens, closes or reconnects the underlying link.
pub trait Transport {
	fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError>;
}

/// Unchunked whole-buffer writes over a serial port.
pub struct SerialTransport {
	port: Box<dyn SerialPort>,
}

impl SerialTransport {
	/// Open `path` at the controller's baud rate.
	pub fn open(path: &str) -> std::result::Result<Self, TransportError> {
		let port = serialport::new(path, BAUD_RATE)
			.timeout(Duration::from_millis(500))
			.open()?;

		Ok(Self { port })
	}

	/// Wrap an already-open port.
	pub fn from_port(port: Box<dyn SerialPort>) -> Self {
		Self { port }
	}
}

impl Transport for SerialTransport {
	fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError> {
		self.port.write_all(bytes)?;

		Ok(())
	}
}

/// Splits buffers into fixed-size chunks with a pause between them.
///
/// For links with a small maximum write size (a BLE UART bridge accepts 20
/// bytes per characteristic value and buffers slowly). The pause follows
/// every chunk except the last; a failed chunk aborts the remainder, so a
/// command may be partially delivered and should be resent whole.
pub struct Chunked<T> {
	inner:      T,
	chunk_size: usize,
	delay:      Duration,
}

impl<T> Chunked<T> {
	pub fn new(inner: T) -> Self {
		Self::with_pacing(
			inner,
			DEFAULT_CHUNK_SIZE,
			Duration::from_millis(INTER_CHUNK_DELAY_MS),
		)
	}

	pub fn with_pacing(inner: T, chunk_size: usize, delay: Duration) -> Self {
		assert!(chunk_size > 0, "chunk size must be nonzero");

		Self {
			inner,
			chunk_size,
			delay,
		}
	}

	pub fn into_inner(self) -> T {
		self.inner
	}
}

impl<T: Transport> Transport for Chunked<T> {
	fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError> {
		for (i, chunk) in bytes.chunks(self.chunk_size).enumerate() {
			if i > 0 {
				thread::sleep(self.delay);
			}

			debug!(chunk = i, len = chunk.len(), "sending chunk");
			self.inner.send(chunk)?;
		}

		Ok(())
	}
}

/// Outcome of driving a command through a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
	/// Every attached transport accepted the command.
	Sent { transports: usize },
	/// No transport attached; nothing was written anywhere.
	NothingSent,
}

/// The caller-owned context holding whatever transports are attached.
///
/// Zero, one or several transports may be attached at once (e.g. mirroring a
/// command to both a wired and a wireless link); each is driven
/// independently. Sends take `&mut self`, so no two commands can interleave
/// their bytes on the same transport.
#[derive(Default)]
pub struct Session {
	transports: Vec<Box<dyn Transport + Send>>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn attach(&mut self, transport: impl Transport + Send + 'static) {
		self.transports.push(Box::new(transport));
	}

	pub fn transport_count(&self) -> usize {
		self.transports.len()
	}

	/// Send one command over every attached transport.
	///
	/// With no transport attached this is a no-op reported as
	/// [`SendOutcome::NothingSent`], not an error. If any transport fails the
	/// first failure is returned after all transports have been driven;
	/// commands are idempotent, so the caller may simply resend.
	pub fn send(&mut self, command: &Command) -> Result<SendOutcome> {
		if self.transports.is_empty() {
			debug!("no transport attached, nothing sent");
			return Ok(SendOutcome::NothingSent);
		}

		let mut first_failure = None;

		for (i, transport) in self.transports.iter_mut().enumerate() {
			if let Err(e) = transport.send(command.as_bytes()) {
				warn!(transport = i, error = %e, "transport send failed");
				first_failure.get_or_insert(e);
			}
		}

		match first_failure {
			Some(e) => Err(Error::Transport(e)),
			None => Ok(SendOutcome::Sent {
				transports: self.transports.len(),
			}),
		}
	}
}
