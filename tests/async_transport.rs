#![cfg(feature = "tokio")]

use std::{
	io,
	sync::{Arc, Mutex},
	time::Duration,
};

use async_trait::async_trait;
use quadled::{
	tokio::{AsyncTransport, Chunked, Session},
	Command,
	SendOutcome,
	TransportError,
};

#[derive(Clone, Default)]
struct MockTransport {
	writes:     Arc<Mutex<Vec<Vec<u8>>>>,
	fail_after: Option<usize>,
}

impl MockTransport {
	fn writes(&self) -> Vec<Vec<u8>> {
		self.writes.lock().unwrap().clone()
	}
}

#[async_trait]
impl AsyncTransport for MockTransport {
	async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
		let mut writes = self.writes.lock().unwrap();

		if self.fail_after.is_some_and(|n| writes.len() >= n) {
			return Err(TransportError::Io(io::Error::new(
				io::ErrorKind::BrokenPipe,
				"link dropped",
			)));
		}

		writes.push(bytes.to_vec());
		Ok(())
	}
}

#[tokio::test(start_paused = true)]
async fn chunked_paces_writes_without_blocking() {
	let mock = MockTransport::default();
	let mut chunked = Chunked::new(mock.clone());

	let start = tokio::time::Instant::now();
	chunked.send(&[0u8; 130]).await.unwrap();

	// 7 chunks with 6 100 ms pauses on the paused test clock.
	assert_eq!(start.elapsed(), Duration::from_millis(600));

	let writes = mock.writes();
	assert_eq!(writes.len(), 7);
	assert!(writes[..6].iter().all(|w| w.len() == 20));
	assert_eq!(writes[6].len(), 10);
}

#[tokio::test]
async fn chunked_aborts_on_failure() {
	let mock = MockTransport {
		fail_after: Some(2),
		..MockTransport::default()
	};
	let mut chunked = Chunked::with_pacing(mock.clone(), 20, Duration::ZERO);

	assert!(chunked.send(&[0u8; 130]).await.is_err());
	assert_eq!(mock.writes().len(), 2);
}

#[tokio::test]
async fn session_outcomes_match_the_blocking_side() {
	let mut session = Session::new();
	assert_eq!(
		session.send(&Command::start_playback()).await.unwrap(),
		SendOutcome::NothingSent
	);

	let mock = MockTransport::default();
	session.attach(mock.clone());

	let command = Command::set_speed(3);
	assert_eq!(
		session.send(&command).await.unwrap(),
		SendOutcome::Sent { transports: 1 }
	);
	assert_eq!(mock.writes(), vec![command.as_bytes().to_vec()]);
}
