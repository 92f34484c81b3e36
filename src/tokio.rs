//! Async counterparts to the blocking transport layer.

use std::time::Duration;

use async_trait::async_trait;
use quadled_shared::{BAUD_RATE, DEFAULT_CHUNK_SIZE, INTER_CHUNK_DELAY_MS};
use tokio::io::AsyncWriteExt;
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::{debug, warn};

use crate::{command::Command, transport::SendOutcome, Error, Result, TransportError};

/// Async version of [`crate::transport::Transport`].
#[async_trait]
pub trait AsyncTransport: Send {
	async fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError>;
}

/// Unchunked whole-buffer writes over an async serial port.
pub struct SerialTransport {
	port: SerialStream,
}

impl SerialTransport {
	/// Open `path` at the controller's baud rate.
	pub fn open(path: &str) -> std::result::Result<Self, TransportError> {
		let port = tokio_serial::new(path, BAUD_RATE).open_native_async()?;

		Ok(Self { port })
	}

	/// Wrap an already-open stream.
	pub fn from_stream(port: SerialStream) -> Self {
		Self { port }
	}
}

#[async_trait]
impl AsyncTransport for SerialTransport {
	async fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError> {
		self.port.write_all(bytes).await?;

		Ok(())
	}
}

/// Async variant of [`crate::transport::Chunked`].
///
/// Same contract: fixed-size chunks, a pause after every chunk except the
/// last, abort on the first failed chunk. The pause is a non-blocking
/// [`tokio::time::sleep`], so other tasks keep running between chunks.
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

#[async_trait]
impl<T: AsyncTransport> AsyncTransport for Chunked<T> {
	async fn send(&mut self, bytes: &[u8]) -> std::result::Result<(), TransportError> {
		for (i, chunk) in bytes.chunks(self.chunk_size).enumerate() {
			if i > 0 {
				tokio::time::sleep(self.delay).await;
			}

			debug!(chunk = i, len = chunk.len(), "sending chunk");
			self.inner.send(chunk).await?;
		}

		Ok(())
	}
}

/// Async session; same semantics as [`crate::transport::Session`].
#[derive(Default)]
pub struct Session {
	transports: Vec<Box<dyn AsyncTransport>>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn attach(&mut self, transport: impl AsyncTransport + 'static) {
		self.transports.push(Box::new(transport));
	}

	pub fn transport_count(&self) -> usize {
		self.transports.len()
	}

	/// Send one command over every attached transport.
	///
	/// No transport attached is a no-op reported as
	/// [`SendOutcome::NothingSent`]. All transports are driven even if one
	/// fails; the first failure is returned.
	pub async fn send(&mut self, command: &Command) -> Result<SendOutcome> {
		if self.transports.is_empty() {
			debug!("no transport attached, nothing sent");
			return Ok(SendOutcome::NothingSent);
		}

		let mut first_failure = None;

		for (i, transport) in self.transports.iter_mut().enumerate() {
			if let Err(e) = transport.send(command.as_bytes()).await {
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
